/// Receives parse events for the XML element a resource wrapper represents.
///
/// The response parser calls `end_element` with each child tag's name and
/// text content; wrappers map known tags onto fields and keep the rest.
pub trait ResponseElement {
    fn start_element(&mut self, _name: &str) {}

    fn end_element(&mut self, name: &str, value: &str);
}
