//! Outbound channel dispatch
//!
//! Rendering and sending are done by external collaborators. They receive
//! households through the [`ChannelSink`] trait. [`ManifestSink`] is the
//! bundled implementation: it records every dispatch and writes a JSON
//! manifest of recipients into the output directory.

use crate::app::models::Household;
use crate::constants::MANIFEST_FILE_NAME;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Receiver of selected households for each output channel
pub trait ChannelSink {
    /// Hand a household over for email delivery
    fn send_email(&mut self, household: &Household, subject: &str) -> Result<()>;

    /// Hand a household over for letter generation into `output_dir`
    fn create_letter(&mut self, household: &Household, output_dir: &Path) -> Result<()>;

    /// Called once after all households were dispatched
    fn finish(&mut self, _output_dir: &Path) -> Result<()> {
        Ok(())
    }
}

/// Read-only view of a household as handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub household_number: u32,
    pub recipient_name: String,
    pub membership_type: String,
    pub first_names: Vec<String>,
    pub surnames: Vec<String>,
    pub street: String,
    pub address: String,
    pub email: String,
    pub mobile: String,
    pub telephone: String,
    pub has_paid: bool,
}

impl From<&Household> for ManifestEntry {
    fn from(household: &Household) -> Self {
        Self {
            household_number: household.household_number(),
            recipient_name: household.recipient_name(),
            membership_type: household.membership_type().to_string(),
            first_names: household
                .all_first_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            surnames: household
                .all_surnames()
                .into_iter()
                .map(str::to_string)
                .collect(),
            street: household.street().to_string(),
            address: household.address().to_string(),
            email: household.first_email().to_string(),
            mobile: household.first_mobile().to_string(),
            telephone: household.first_telephone().to_string(),
            has_paid: household.has_paid(),
        }
    }
}

/// Recipients handed to the email and letter collaborators
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientManifest {
    pub email_subject: String,
    pub email: Vec<ManifestEntry>,
    pub letter: Vec<ManifestEntry>,
}

/// Sink that records dispatched households and writes them as JSON
#[derive(Debug, Default)]
pub struct ManifestSink {
    manifest: RecipientManifest,
    written_to: Option<PathBuf>,
}

impl ManifestSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manifest(&self) -> &RecipientManifest {
        &self.manifest
    }

    /// Path of the manifest, once written
    pub fn written_to(&self) -> Option<&Path> {
        self.written_to.as_deref()
    }
}

impl ChannelSink for ManifestSink {
    fn send_email(&mut self, household: &Household, subject: &str) -> Result<()> {
        debug!("Recording email to {}", household.recipient_name());
        if self.manifest.email_subject.is_empty() {
            self.manifest.email_subject = subject.to_string();
        }
        self.manifest.email.push(ManifestEntry::from(household));
        Ok(())
    }

    fn create_letter(&mut self, household: &Household, _output_dir: &Path) -> Result<()> {
        debug!("Recording letter to {}", household.recipient_name());
        self.manifest.letter.push(ManifestEntry::from(household));
        Ok(())
    }

    fn finish(&mut self, output_dir: &Path) -> Result<()> {
        fs::create_dir_all(output_dir).map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", output_dir.display()),
                e,
            )
        })?;

        let path = output_dir.join(MANIFEST_FILE_NAME);
        let json = serde_json::to_string_pretty(&self.manifest)
            .map_err(|e| Error::serialization("Failed to serialize recipient manifest", e))?;
        fs::write(&path, json)
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

        info!(
            "Wrote {} email and {} letter recipients to {}",
            self.manifest.email.len(),
            self.manifest.letter.len(),
            path.display()
        );
        self.written_to = Some(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Member;
    use tempfile::TempDir;

    fn household() -> Household {
        let member = Member {
            household_no: 12,
            first_name: "Ada".to_string(),
            surname: "King Lovelace".to_string(),
            membership_type: "Familj".to_string(),
            street: "Streetname 71".to_string(),
            address: "123 City".to_string(),
            telephone: String::new(),
            mobile: "4321".to_string(),
            email: "ada@lovelace.com".to_string(),
            has_paid: true,
        };
        Household::new(vec![
            member.clone(),
            Member {
                first_name: "Byron".to_string(),
                surname: "Lovelace".to_string(),
                ..member
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_manifest_entry_from_household() {
        let entry = ManifestEntry::from(&household());

        assert_eq!(entry.household_number, 12);
        assert_eq!(entry.recipient_name, "King, Lovelace (Ada, Byron)");
        assert_eq!(entry.first_names, vec!["Ada", "Byron"]);
        assert_eq!(entry.surnames, vec!["King", "Lovelace"]);
        assert_eq!(entry.email, "ada@lovelace.com");
        assert!(entry.has_paid);
    }

    #[test]
    fn test_manifest_sink_writes_json() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("letters");
        let household = household();

        let mut sink = ManifestSink::new();
        sink.send_email(&household, "Medlemsavgift").unwrap();
        sink.create_letter(&household, &output_dir).unwrap();
        sink.finish(&output_dir).unwrap();

        let path = sink.written_to().unwrap();
        assert_eq!(path, output_dir.join(MANIFEST_FILE_NAME));

        let written: RecipientManifest =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(&written, sink.manifest());
        assert_eq!(written.email_subject, "Medlemsavgift");
        assert_eq!(written.email.len(), 1);
        assert_eq!(written.letter.len(), 1);
    }

    #[test]
    fn test_finish_fails_when_output_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("occupied");
        fs::write(&file_path, "not a directory").unwrap();

        let mut sink = ManifestSink::new();
        assert!(matches!(
            sink.finish(&file_path),
            Err(Error::Io { .. })
        ));
    }
}
