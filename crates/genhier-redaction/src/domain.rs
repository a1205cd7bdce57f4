use serde::{Deserialize, Serialize};

/// Size metadata of the redacted domain. Not used to build the hierarchy;
/// carried for downstream information-loss metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainProperties {
    pub domain_size: Option<f64>,
    pub alphabet_size: Option<u32>,
    pub max_value_length: Option<u32>,
}

impl DomainProperties {
    pub fn with_domain_size(domain_size: f64) -> Self {
        Self {
            domain_size: Some(domain_size),
            ..Self::default()
        }
    }

    /// Domain size derived as `alphabet_size ^ max_value_length`.
    pub fn with_alphabet_size(alphabet_size: u32, max_value_length: u32) -> Self {
        Self {
            domain_size: Some(f64::from(alphabet_size).powf(f64::from(max_value_length))),
            alphabet_size: Some(alphabet_size),
            max_value_length: Some(max_value_length),
        }
    }

    pub fn with_domain_and_alphabet_size(
        domain_size: f64,
        alphabet_size: u32,
        max_value_length: u32,
    ) -> Self {
        Self {
            domain_size: Some(domain_size),
            alphabet_size: Some(alphabet_size),
            max_value_length: Some(max_value_length),
        }
    }

    /// True once every property is known.
    pub fn is_complete(&self) -> bool {
        self.domain_size.is_some()
            && self.alphabet_size.is_some()
            && self.max_value_length.is_some()
    }
}
