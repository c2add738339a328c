use super::ComponentType;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Dependency types that can be left out of the SBOM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OmitType {
    Dev,
    Optional,
    Peer,
}

impl OmitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OmitType::Dev => "dev",
            OmitType::Optional => "optional",
            OmitType::Peer => "peer",
        }
    }
}

impl FromStr for OmitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(OmitType::Dev),
            "optional" => Ok(OmitType::Optional),
            "peer" => Ok(OmitType::Peer),
            _ => Err(format!(
                "Invalid omit type: {}. Please specify 'dev', 'optional' or 'peer'",
                s
            )),
        }
    }
}

impl fmt::Display for OmitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options steering one graph build and assembly
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildOptions {
    pub omit: BTreeSet<OmitType>,
    pub flatten_components: bool,
    pub short_purls: bool,
    pub reproducible: bool,
    pub root_component_type: ComponentType,
}

impl BuildOptions {
    pub fn omits(&self, omit_type: OmitType) -> bool {
        self.omit.contains(&omit_type)
    }
}
