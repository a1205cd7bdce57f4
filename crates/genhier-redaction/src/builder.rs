use genhier_core::config::RedactionConfig;
use genhier_core::constants::NULL_VALUE;
use genhier_core::{
    BuilderKind, BuilderState, Direction, Hierarchy, HierarchyResult, IHierarchyBuilder,
};
use tracing::info;

use crate::domain::DomainProperties;

/// Pads values to a common length, then masks `d` characters at level `d`.
///
/// The token `NULL` is never padded or masked.
#[derive(Debug, Clone)]
pub struct RedactionBasedBuilder {
    redaction_character: char,
    padding_character: char,
    redaction_order: Direction,
    alignment_order: Direction,
    domain: DomainProperties,
    state: BuilderState<Hierarchy>,
}

impl Default for RedactionBasedBuilder {
    fn default() -> Self {
        Self::from_config(&RedactionConfig::default())
    }
}

impl RedactionBasedBuilder {
    pub fn new(
        redaction_character: char,
        padding_character: char,
        redaction_order: Direction,
        alignment_order: Direction,
    ) -> Self {
        Self {
            redaction_character,
            padding_character,
            redaction_order,
            alignment_order,
            domain: DomainProperties::default(),
            state: BuilderState::Unprepared,
        }
    }

    pub fn from_config(config: &RedactionConfig) -> Self {
        Self::new(
            config.redaction_character,
            config.padding_character,
            config.redaction_order,
            config.alignment_order,
        )
    }

    pub fn redaction_character(&self) -> char {
        self.redaction_character
    }

    pub fn padding_character(&self) -> char {
        self.padding_character
    }

    pub fn redaction_order(&self) -> Direction {
        self.redaction_order
    }

    pub fn alignment_order(&self) -> Direction {
        self.alignment_order
    }

    pub fn set_redaction_character(&mut self, c: char) {
        self.redaction_character = c;
        self.state.reset();
    }

    pub fn set_padding_character(&mut self, c: char) {
        self.padding_character = c;
        self.state.reset();
    }

    pub fn set_redaction_order(&mut self, order: Direction) {
        self.redaction_order = order;
        self.state.reset();
    }

    pub fn set_alignment_order(&mut self, order: Direction) {
        self.alignment_order = order;
        self.state.reset();
    }

    // --- Domain metadata ---

    pub fn domain_properties(&self) -> &DomainProperties {
        &self.domain
    }

    pub fn set_domain_size(&mut self, domain_size: f64) {
        self.domain = DomainProperties::with_domain_size(domain_size);
        self.state.reset();
    }

    pub fn set_alphabet_size(&mut self, alphabet_size: u32, max_value_length: u32) {
        self.domain = DomainProperties::with_alphabet_size(alphabet_size, max_value_length);
        self.state.reset();
    }

    pub fn set_domain_and_alphabet_size(
        &mut self,
        domain_size: f64,
        alphabet_size: u32,
        max_value_length: u32,
    ) {
        self.domain = DomainProperties::with_domain_and_alphabet_size(
            domain_size,
            alphabet_size,
            max_value_length,
        );
        self.state.reset();
    }

    pub fn is_domain_property_available(&self) -> bool {
        self.domain.is_complete()
    }

    fn pad(&self, value: &str, width: usize) -> Vec<char> {
        let chars: Vec<char> = value.chars().collect();
        let padding = std::iter::repeat(self.padding_character).take(width - chars.len());
        match self.alignment_order {
            Direction::LeftToRight => chars.into_iter().chain(padding).collect(),
            Direction::RightToLeft => padding.chain(chars).collect(),
        }
    }

    fn redact(&self, padded: &[char], depth: usize) -> String {
        let width = padded.len();
        padded
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let masked = match self.redaction_order {
                    Direction::LeftToRight => i < depth,
                    Direction::RightToLeft => i >= width - depth,
                };
                if masked {
                    self.redaction_character
                } else {
                    c
                }
            })
            .collect()
    }
}

impl IHierarchyBuilder for RedactionBasedBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::RedactionBased
    }

    fn is_prepared(&self) -> bool {
        self.state.is_prepared()
    }

    fn prepare(&mut self, data: &[String]) -> HierarchyResult<Vec<usize>> {
        self.state.reset();
        let width = data
            .iter()
            .filter(|v| v.as_str() != NULL_VALUE)
            .map(|v| v.chars().count())
            .max()
            .unwrap_or(0);

        let rows = data
            .iter()
            .map(|raw| {
                let mut row = Vec::with_capacity(width + 1);
                row.push(raw.clone());
                if raw == NULL_VALUE {
                    row.extend(std::iter::repeat(raw.clone()).take(width));
                } else {
                    let padded = self.pad(raw, width);
                    row.extend((1..=width).map(|depth| self.redact(&padded, depth)));
                }
                row
            })
            .collect();
        let hierarchy = Hierarchy::new(rows)?;
        let counts = hierarchy.distinct_per_level();
        info!(
            rows = data.len(),
            max_length = width,
            "redaction-based hierarchy prepared"
        );
        self.state = BuilderState::Prepared(hierarchy);
        Ok(counts)
    }

    fn build(&mut self) -> HierarchyResult<Hierarchy> {
        let kind = self.kind();
        self.state.take(kind)
    }
}
