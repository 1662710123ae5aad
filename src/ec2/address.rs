use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::element::ResponseElement;

/// An EC2 Elastic IP address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// The Elastic IP address.
    pub public_ip: Option<String>,
    /// The instance the address is associated with, if any.
    pub instance_id: Option<String>,
    /// `standard` for EC2-Classic addresses, `vpc` for VPC addresses.
    pub domain: Option<String>,
    /// Allocation ID (VPC addresses only).
    pub allocation_id: Option<String>,
    /// Association ID (VPC addresses only).
    pub association_id: Option<String>,
    /// Response tags without a dedicated field, keyed by tag name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Address {
    pub fn new(public_ip: Option<String>, instance_id: Option<String>) -> Self {
        Self {
            public_ip,
            instance_id,
            ..Self::default()
        }
    }

    pub fn is_vpc(&self) -> bool {
        self.domain.as_deref() == Some("vpc")
    }

    pub fn extra(&self, tag: &str) -> Option<&str> {
        self.extra.get(tag).map(String::as_str)
    }
}

impl ResponseElement for Address {
    fn end_element(&mut self, name: &str, value: &str) {
        let value = value.to_string();
        match name {
            "publicIp" => self.public_ip = Some(value),
            "instanceId" => self.instance_id = Some(value),
            "domain" => self.domain = Some(value),
            "allocationId" => self.allocation_id = Some(value),
            "associationId" => self.association_id = Some(value),
            _ => {
                self.extra.insert(name.to_string(), value);
            }
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address:{}", self.public_ip.as_deref().unwrap_or_default())
    }
}
