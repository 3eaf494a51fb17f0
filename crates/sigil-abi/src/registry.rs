//! Fragment registry: resolves fragments by name, selector, or topic

use std::collections::HashMap;

use sigil_primitives::{Selector, H256};
use tracing::{debug, trace};

use crate::fragment::{Fragment, FragmentKind, JsonFragment};
use crate::AbiError;

/// Indexed view over the fragments of one contract interface description
///
/// Built once; fragments are owned here for the lifetime of the interface
/// and never mutated afterwards, so the selector and topic tables can never
/// go stale. First occurrence wins in every table and scan, matching a
/// linear scan over the original declaration order.
#[derive(Debug, Clone)]
pub struct Interface {
    fragments: Vec<Fragment>,
    by_selector: HashMap<Selector, usize>,
    by_topic: HashMap<H256, usize>,
}

impl Interface {
    /// Build an interface from an ordered fragment sequence
    pub fn new(fragments: Vec<Fragment>) -> Self {
        let mut by_selector = HashMap::new();
        let mut by_topic = HashMap::new();

        for (index, fragment) in fragments.iter().enumerate() {
            match fragment.kind() {
                FragmentKind::Function | FragmentKind::Error => {
                    if let Some(selector) = fragment.selector() {
                        by_selector.entry(selector).or_insert(index);
                    }
                }
                FragmentKind::Event => {
                    if let Some(topic) = fragment.topic() {
                        by_topic.entry(topic).or_insert(index);
                    }
                }
                FragmentKind::Constructor => {}
            }
        }

        debug!(
            "Indexed {} fragments ({} selectors, {} topics)",
            fragments.len(),
            by_selector.len(),
            by_topic.len()
        );

        Interface {
            fragments,
            by_selector,
            by_topic,
        }
    }

    /// Parse an interface from its JSON description
    ///
    /// Entries whose type is outside the four fragment kinds are skipped;
    /// malformed entries (missing name or inputs, unknown parameter types)
    /// fail the whole parse.
    pub fn parse(json: &str) -> Result<Self, AbiError> {
        let raw: Vec<JsonFragment> = serde_json::from_str(json)?;
        let mut fragments = Vec::with_capacity(raw.len());
        for entry in &raw {
            match Fragment::from_json(entry)? {
                Some(fragment) => fragments.push(fragment),
                None => trace!("Skipping {} entry", entry.kind),
            }
        }
        Ok(Self::new(fragments))
    }

    /// All fragments, in declaration order
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The constructor fragment
    pub fn constructor(&self) -> Result<&Fragment, AbiError> {
        self.fragments
            .iter()
            .find(|f| f.kind() == FragmentKind::Constructor)
            .ok_or_else(|| AbiError::NotFound("no constructor in interface".to_string()))
    }

    /// First function fragment with the given name
    ///
    /// Overloaded functions sharing a name resolve to the first declaration
    /// only; later overloads are reachable through
    /// [`function_by_selector`](Self::function_by_selector).
    pub fn function(&self, name: &str) -> Result<&Fragment, AbiError> {
        self.by_name(FragmentKind::Function, name)
            .ok_or_else(|| AbiError::NotFound(format!("no function named {}", name)))
    }

    /// Function or error fragment with the given selector
    pub fn function_by_selector(&self, selector: Selector) -> Result<&Fragment, AbiError> {
        self.by_selector
            .get(&selector)
            .map(|&index| &self.fragments[index])
            .ok_or_else(|| AbiError::NotFound(format!("no fragment with selector {}", selector)))
    }

    /// First event fragment with the given name
    pub fn event(&self, name: &str) -> Result<&Fragment, AbiError> {
        self.by_name(FragmentKind::Event, name)
            .ok_or_else(|| AbiError::NotFound(format!("no event named {}", name)))
    }

    /// Event fragment with the given topic
    pub fn event_by_topic(&self, topic: H256) -> Result<&Fragment, AbiError> {
        self.by_topic
            .get(&topic)
            .map(|&index| &self.fragments[index])
            .ok_or_else(|| AbiError::NotFound(format!("no event with topic {}", topic)))
    }

    /// First error fragment with the given name
    pub fn error_fragment(&self, name: &str) -> Result<&Fragment, AbiError> {
        self.by_name(FragmentKind::Error, name)
            .ok_or_else(|| AbiError::NotFound(format!("no error named {}", name)))
    }

    fn by_name(&self, kind: FragmentKind, name: &str) -> Option<&Fragment> {
        self.fragments
            .iter()
            .find(|f| f.kind() == kind && f.name() == Some(name))
    }
}
