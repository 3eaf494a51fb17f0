//! Interface fragments: one entry of a contract interface description

use serde::Deserialize;
use sigil_primitives::{Selector, H256};

use crate::param::{JsonParam, Param};
use crate::selector::{selector_of, topic_of};
use crate::signature::signature;
use crate::AbiError;

/// Kind of interface entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Callable function
    Function,
    /// Emitted event
    Event,
    /// Deployment constructor
    Constructor,
    /// Revert error
    Error,
}

/// One entry of a contract interface description
///
/// Fragments are read-only after the registry is built: they are only
/// queried, never mutated, and all derived values (signature, selector,
/// topic) are recomputed from this immutable data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    kind: FragmentKind,
    name: Option<String>,
    inputs: Vec<Param>,
    outputs: Vec<Param>,
}

impl Fragment {
    /// Create a function fragment
    pub fn function(name: impl Into<String>, inputs: Vec<Param>, outputs: Vec<Param>) -> Self {
        Fragment {
            kind: FragmentKind::Function,
            name: Some(name.into()),
            inputs,
            outputs,
        }
    }

    /// Create an event fragment
    pub fn event(name: impl Into<String>, inputs: Vec<Param>) -> Self {
        Fragment {
            kind: FragmentKind::Event,
            name: Some(name.into()),
            inputs,
            outputs: Vec::new(),
        }
    }

    /// Create a constructor fragment
    pub fn constructor(inputs: Vec<Param>) -> Self {
        Fragment {
            kind: FragmentKind::Constructor,
            name: None,
            inputs,
            outputs: Vec::new(),
        }
    }

    /// Create an error fragment
    pub fn error(name: impl Into<String>, inputs: Vec<Param>) -> Self {
        Fragment {
            kind: FragmentKind::Error,
            name: Some(name.into()),
            inputs,
            outputs: Vec::new(),
        }
    }

    /// Build a fragment from its JSON interface record
    ///
    /// Returns `Ok(None)` for record types outside the four fragment kinds
    /// (`fallback`, `receive`, ...), which valid interface descriptions may
    /// contain but this registry does not resolve.
    pub fn from_json(raw: &JsonFragment) -> Result<Option<Self>, AbiError> {
        let kind = match raw.kind.as_str() {
            "function" => FragmentKind::Function,
            "event" => FragmentKind::Event,
            "constructor" => FragmentKind::Constructor,
            "error" => FragmentKind::Error,
            _ => return Ok(None),
        };

        let inputs = raw
            .inputs
            .as_ref()
            .ok_or_else(|| {
                AbiError::MissingParameters(format!("{} entry has no inputs list", raw.kind))
            })?
            .iter()
            .map(Param::from_json)
            .collect::<Result<Vec<_>, _>>()?;

        let name = match kind {
            FragmentKind::Constructor => None,
            _ => Some(raw.name.clone().ok_or_else(|| {
                AbiError::MissingParameters(format!("{} entry has no name", raw.kind))
            })?),
        };

        let outputs = match kind {
            FragmentKind::Function => raw
                .outputs
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(Param::from_json)
                .collect::<Result<Vec<_>, _>>()?,
            _ => Vec::new(),
        };

        Ok(Some(Fragment {
            kind,
            name,
            inputs,
            outputs,
        }))
    }

    /// Fragment kind
    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// Fragment name; constructors have none
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Input parameters, in declaration order
    pub fn inputs(&self) -> &[Param] {
        &self.inputs
    }

    /// Output parameters (functions only), in declaration order
    pub fn outputs(&self) -> &[Param] {
        &self.outputs
    }

    /// Canonical signature, recomputed from name and inputs
    ///
    /// `None` for constructors, which have no name to render.
    pub fn signature(&self) -> Option<String> {
        self.name.as_deref().map(|name| signature(name, &self.inputs))
    }

    /// 4-byte selector for function and error fragments
    pub fn selector(&self) -> Option<Selector> {
        match self.kind {
            FragmentKind::Function | FragmentKind::Error => {
                self.signature().map(|sig| selector_of(&sig))
            }
            _ => None,
        }
    }

    /// 32-byte topic for event fragments
    pub fn topic(&self) -> Option<H256> {
        match self.kind {
            FragmentKind::Event => self.signature().map(|sig| topic_of(&sig)),
            _ => None,
        }
    }
}

/// Raw JSON fragment record: `{type, name?, inputs?, outputs?}`
#[derive(Debug, Clone, Deserialize)]
pub struct JsonFragment {
    /// Entry type string: `function`, `event`, `constructor`, `error`, ...
    #[serde(rename = "type")]
    pub kind: String,
    /// Entry name; absent for constructors
    #[serde(default)]
    pub name: Option<String>,
    /// Input parameter records
    #[serde(default)]
    pub inputs: Option<Vec<JsonParam>>,
    /// Output parameter records (functions)
    #[serde(default)]
    pub outputs: Option<Vec<JsonParam>>,
}
