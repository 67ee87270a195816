//! # Built-in Jurisdictions
//!
//! [`Jurisdiction`] is the closed set of regimes shipped with regscope. Each
//! variant carries its id, display metadata and a constructor for its
//! module, so dispatch is by explicit tag.
//!
//! | Id | Regime |
//! |----|--------|
//! | `eu-ai-act` | Regulation (EU) 2024/1689 |
//! | `eu-gdpr` | Regulation (EU) 2016/679 |
//! | `us-federal` | FTC Act, ECOA, FCRA, Title VII, COPPA, HIPAA |
//! | `us-ca` | CCPA ADMT regulations, SB 942, AB 2013, SB 53, SB 243, FEHA |
//! | `us-co` | Colorado AI Act (SB 24-205) |
//! | `us-il` | BIPA, HB 3773, AI Video Interview Act |
//! | `us-ny` | NYC Local Law 144, DFS Circular Letter 7, RAISE Act |
//! | `us-tx` | TRAIGA, CUBI, TDPSA |
//! | `uk` | UK GDPR / DPA 2018 as amended, Equality Act, FCA Consumer Duty |
//! | `singapore` | PDPA, Model AI Governance Frameworks, MAS FEAT |
//! | `china` | PIPL, algorithm, deep synthesis, generative AI and labeling rules |
//! | `brazil` | LGPD, PL 2338/2023 |

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use regscope_core::JurisdictionId;

use crate::error::ConfigError;
use crate::module::JurisdictionModule;
use crate::regimes;

/// A built-in jurisdiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Jurisdiction {
    EuAiAct,
    EuGdpr,
    UsFederal,
    UsCa,
    UsCo,
    UsIl,
    UsNy,
    UsTx,
    Uk,
    Singapore,
    China,
    Brazil,
}

impl Jurisdiction {
    /// All built-in jurisdictions in canonical order.
    pub fn all() -> &'static [Jurisdiction] {
        &[
            Self::EuAiAct,
            Self::EuGdpr,
            Self::UsFederal,
            Self::UsCa,
            Self::UsCo,
            Self::UsIl,
            Self::UsNy,
            Self::UsTx,
            Self::Uk,
            Self::Singapore,
            Self::China,
            Self::Brazil,
        ]
    }

    /// The agreed jurisdiction id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EuAiAct => "eu-ai-act",
            Self::EuGdpr => "eu-gdpr",
            Self::UsFederal => "us-federal",
            Self::UsCa => "us-ca",
            Self::UsCo => "us-co",
            Self::UsIl => "us-il",
            Self::UsNy => "us-ny",
            Self::UsTx => "us-tx",
            Self::Uk => "uk",
            Self::Singapore => "singapore",
            Self::China => "china",
            Self::Brazil => "brazil",
        }
    }

    pub fn id(self) -> JurisdictionId {
        JurisdictionId::from_static(self.as_str())
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::EuAiAct => "EU AI Act",
            Self::EuGdpr => "EU General Data Protection Regulation",
            Self::UsFederal => "United States (Federal)",
            Self::UsCa => "California",
            Self::UsCo => "Colorado",
            Self::UsIl => "Illinois",
            Self::UsNy => "New York",
            Self::UsTx => "Texas",
            Self::Uk => "United Kingdom",
            Self::Singapore => "Singapore",
            Self::China => "People's Republic of China",
            Self::Brazil => "Brazil",
        }
    }

    pub fn region(self) -> &'static str {
        match self {
            Self::EuAiAct | Self::EuGdpr => "European Union",
            Self::UsFederal | Self::UsCa | Self::UsCo | Self::UsIl | Self::UsNy | Self::UsTx => {
                "United States"
            }
            Self::Uk => "United Kingdom",
            Self::Singapore | Self::China => "Asia-Pacific",
            Self::Brazil => "Latin America",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::EuAiAct => {
                "Risk-based regulation of AI systems and general-purpose AI models placed on the EU market."
            }
            Self::EuGdpr => {
                "Processing of personal data, automated decision-making and DPIA obligations in the EU."
            }
            Self::UsFederal => {
                "Sectoral federal law applied to AI: consumer protection, fair lending, employment, health and children's privacy."
            }
            Self::UsCa => {
                "CCPA automated decision-making rules, generative AI transparency and frontier model safety."
            }
            Self::UsCo => {
                "Developer and deployer duties for high-risk AI systems making consequential decisions."
            }
            Self::UsIl => "Biometric privacy and AI use in employment decisions.",
            Self::UsNy => {
                "Automated employment decision tools, insurance underwriting AI and frontier model safety."
            }
            Self::UsTx => "Responsible AI governance, biometric identifiers and consumer data privacy.",
            Self::Uk => {
                "Principles-based AI regulation through existing regulators, UK GDPR and equality law."
            }
            Self::Singapore => {
                "Personal data protection and the Model AI Governance Frameworks, including agentic AI."
            }
            Self::China => {
                "Algorithm filing, deep synthesis, generative AI services, content labeling and personal information protection."
            }
            Self::Brazil => "General data protection law and the risk-based AI bill.",
        }
    }

    /// Construct this jurisdiction's module.
    pub fn module(self) -> Arc<dyn JurisdictionModule> {
        match self {
            Self::EuAiAct => Arc::new(regimes::eu_ai_act::EuAiAct),
            Self::EuGdpr => Arc::new(regimes::eu_gdpr::EuGdpr),
            Self::UsFederal => Arc::new(regimes::us_federal::UsFederal),
            Self::UsCa => Arc::new(regimes::us_ca::California),
            Self::UsCo => Arc::new(regimes::us_co::Colorado),
            Self::UsIl => Arc::new(regimes::us_il::Illinois),
            Self::UsNy => Arc::new(regimes::us_ny::NewYork),
            Self::UsTx => Arc::new(regimes::us_tx::Texas),
            Self::Uk => Arc::new(regimes::uk::UnitedKingdom),
            Self::Singapore => Arc::new(regimes::singapore::Singapore),
            Self::China => Arc::new(regimes::china::China),
            Self::Brazil => Arc::new(regimes::brazil::Brazil),
        }
    }

    /// True for the US state-level modules.
    pub fn is_us_state(self) -> bool {
        matches!(
            self,
            Self::UsCa | Self::UsCo | Self::UsIl | Self::UsNy | Self::UsTx
        )
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jurisdiction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|j| j.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownJurisdiction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_builtins() {
        assert_eq!(Jurisdiction::all().len(), 12);
    }

    #[test]
    fn ids_round_trip_through_from_str() {
        for j in Jurisdiction::all() {
            assert_eq!(j.as_str().parse::<Jurisdiction>().unwrap(), *j);
        }
    }

    #[test]
    fn serde_name_matches_id() {
        for j in Jurisdiction::all() {
            let json = serde_json::to_string(j).unwrap();
            assert_eq!(json, format!("\"{}\"", j.as_str()));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = "mars".parse::<Jurisdiction>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownJurisdiction(ref id) if id == "mars"));
    }

    #[test]
    fn module_reports_its_own_tag() {
        for j in Jurisdiction::all() {
            assert_eq!(j.module().jurisdiction(), *j);
        }
    }

    #[test]
    fn us_state_partition() {
        let states: Vec<_> = Jurisdiction::all()
            .iter()
            .filter(|j| j.is_us_state())
            .map(|j| j.as_str())
            .collect();
        assert_eq!(states, vec!["us-ca", "us-co", "us-il", "us-ny", "us-tx"]);
    }
}
