//! Chart configuration.

use serde::{Deserialize, Serialize};

use kundali_core::NodeMode;
use kundali_vedic_base::{AyanamshaSystem, BhavaSystem};

/// User-selectable chart options.
///
/// Missing fields take their defaults when deserialized, so `{}` is the
/// default chart: whole sign houses, Lahiri ayanamsha, true nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub house_system: BhavaSystem,
    pub ayanamsha: AyanamshaSystem,
    pub node_mode: NodeMode,
}

impl ChartConfig {
    pub fn new(house_system: BhavaSystem, ayanamsha: AyanamshaSystem) -> Self {
        Self {
            house_system,
            ayanamsha,
            ..Self::default()
        }
    }

    pub fn with_node_mode(mut self, node_mode: NodeMode) -> Self {
        self.node_mode = node_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ChartConfig::default();
        assert_eq!(c.house_system, BhavaSystem::WholeSign);
        assert_eq!(c.ayanamsha, AyanamshaSystem::Lahiri);
        assert_eq!(c.node_mode, NodeMode::True);
    }

    #[test]
    fn builder_keeps_other_fields() {
        let c = ChartConfig::new(BhavaSystem::Placidus, AyanamshaSystem::KP)
            .with_node_mode(NodeMode::Mean);
        assert_eq!(c.house_system, BhavaSystem::Placidus);
        assert_eq!(c.ayanamsha, AyanamshaSystem::KP);
        assert_eq!(c.node_mode, NodeMode::Mean);
    }
}
