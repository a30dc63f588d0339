//! Public diagnostics snapshot of cached routing state. Not part of any routing decision.

use crate::network_state::AccessNetworkType;
use crate::observability::fields;
use crate::supp_service::{CbFacility, CfReason, SsService};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DomainSnapshot {
    pub name: String,
    pub config_version: u64,
    pub ut_supported: bool,
    pub csfb_supported: bool,
    pub cb_over_ut: BTreeSet<CbFacility>,
    pub cf_over_ut: BTreeSet<CfReason>,
    pub ss_over_ut: BTreeSet<SsService>,
    pub requires_ims_registration: bool,
    pub available_when_ps_data_off: bool,
    pub available_when_roaming: bool,
    pub ut_transports: BTreeSet<AccessNetworkType>,
    pub wifi_available: bool,
    pub monitoring_active: bool,
}

impl Display for DomainSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "SsDomain[{}]:", self.name)?;
        writeln!(f, "  config_version={}", self.config_version)?;
        writeln!(f, "  ut_supported={}", self.ut_supported)?;
        writeln!(f, "  csfb_supported={}", self.csfb_supported)?;
        writeln!(f, "  cb_over_ut={}", fields::format_set(&self.cb_over_ut))?;
        writeln!(f, "  cf_over_ut={}", fields::format_set(&self.cf_over_ut))?;
        writeln!(f, "  ss_over_ut={}", fields::format_set(&self.ss_over_ut))?;
        writeln!(
            f,
            "  requires_ims_registration={}",
            self.requires_ims_registration
        )?;
        writeln!(
            f,
            "  available_when_ps_data_off={}",
            self.available_when_ps_data_off
        )?;
        writeln!(f, "  available_when_roaming={}", self.available_when_roaming)?;
        writeln!(f, "  ut_transports={}", fields::format_set(&self.ut_transports))?;
        writeln!(f, "  wifi_available={}", self.wifi_available)?;
        write!(f, "  monitoring_active={}", self.monitoring_active)
    }
}

#[cfg(test)]
mod tests {
    use super::DomainSnapshot;
    use crate::network_state::AccessNetworkType;
    use crate::supp_service::{CbFacility, CfReason, SsService};
    use std::collections::BTreeSet;

    fn snapshot() -> DomainSnapshot {
        DomainSnapshot {
            name: "slot0".to_string(),
            config_version: 3,
            ut_supported: true,
            csfb_supported: false,
            cb_over_ut: [CbFacility::Baoc].into_iter().collect(),
            cf_over_ut: [CfReason::Busy, CfReason::Unconditional].into_iter().collect(),
            ss_over_ut: [SsService::Cw].into_iter().collect(),
            requires_ims_registration: true,
            available_when_ps_data_off: false,
            available_when_roaming: true,
            ut_transports: [AccessNetworkType::Iwlan, AccessNetworkType::Eutran]
                .into_iter()
                .collect(),
            wifi_available: true,
            monitoring_active: true,
        }
    }

    #[test]
    fn display_lists_one_field_per_line() {
        let rendered = snapshot().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "SsDomain[slot0]:");
        assert!(lines.contains(&"  cb_over_ut=[AO]"));
        assert!(lines.contains(&"  cf_over_ut=[0, 1]"));
        assert!(lines.contains(&"  ss_over_ut=[CW]"));
        assert!(lines.contains(&"  ut_transports=[EUTRAN, IWLAN]"));
        assert_eq!(lines.last(), Some(&"  monitoring_active=true"));
    }

    #[test]
    fn empty_sets_render_as_empty_brackets() {
        let mut snapshot = snapshot();
        snapshot.cb_over_ut = BTreeSet::new();

        assert!(snapshot.to_string().contains("  cb_over_ut=[]"));
    }
}
