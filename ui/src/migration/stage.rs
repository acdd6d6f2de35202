//! Record-transfer stages of a migration run, keyed by progress percentage.

/// Stages a run moves through, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationStage {
    ConnectSource,
    ConnectDestination,
    MapFields,
    TransferContacts,
    TransferCompanies,
    TransferDeals,
    Verify,
}

impl MigrationStage {
    pub const ORDERED: [MigrationStage; 7] = [
        MigrationStage::ConnectSource,
        MigrationStage::ConnectDestination,
        MigrationStage::MapFields,
        MigrationStage::TransferContacts,
        MigrationStage::TransferCompanies,
        MigrationStage::TransferDeals,
        MigrationStage::Verify,
    ];

    /// Progress percentage at which the stage begins
    pub fn starts_at(&self) -> u8 {
        match self {
            MigrationStage::ConnectSource => 0,
            MigrationStage::ConnectDestination => 10,
            MigrationStage::MapFields => 20,
            MigrationStage::TransferContacts => 30,
            MigrationStage::TransferCompanies => 55,
            MigrationStage::TransferDeals => 75,
            MigrationStage::Verify => 90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MigrationStage::ConnectSource => "Connecting to source CRM...",
            MigrationStage::ConnectDestination => "Connecting to destination CRM...",
            MigrationStage::MapFields => "Mapping fields...",
            MigrationStage::TransferContacts => "Transferring contacts...",
            MigrationStage::TransferCompanies => "Transferring companies...",
            MigrationStage::TransferDeals => "Transferring deals...",
            MigrationStage::Verify => "Verifying migrated records...",
        }
    }

    /// The stage in effect at `progress` (clamped to 100).
    pub fn for_progress(progress: u8) -> MigrationStage {
        let progress = progress.min(100);
        Self::ORDERED
            .into_iter()
            .rev()
            .find(|stage| stage.starts_at() <= progress)
            .unwrap_or(MigrationStage::ConnectSource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_are_ordered() {
        let starts: Vec<u8> = MigrationStage::ORDERED.iter().map(|s| s.starts_at()).collect();
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(starts[0], 0);
    }

    #[test]
    fn test_stage_for_progress() {
        assert_eq!(MigrationStage::for_progress(0), MigrationStage::ConnectSource);
        assert_eq!(MigrationStage::for_progress(29), MigrationStage::MapFields);
        assert_eq!(MigrationStage::for_progress(30), MigrationStage::TransferContacts);
        assert_eq!(MigrationStage::for_progress(100), MigrationStage::Verify);
        assert_eq!(MigrationStage::for_progress(255), MigrationStage::Verify);
    }
}
