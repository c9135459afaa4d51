//! Size budgets per target.
//!
//! The edge artifact must stay within 50 KiB; the standard artifact within
//! 500 KB. Development builds skip the check entirely. Production builds warn
//! by default and can be configured to fail instead.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, Result};
use crate::request::{BuildRequest, Mode, Target};
use crate::settings::BudgetSettings;

const EDGE_LIMIT_BYTES: u64 = 51_200;
const STANDARD_LIMIT_BYTES: u64 = 512_000;

/// How a budget breach is surfaced
///
/// Settings values are parsed through [`FromStr`](std::str::FromStr), so
/// they are case-insensitive and accept `warning` and `error` as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Enforcement {
    /// No check is performed
    Off,
    /// Breaches are reported but never abort the build (default)
    #[default]
    Warn,
    /// Breaches abort the build
    Fail,
}

impl Enforcement {
    pub fn as_str(self) -> &'static str {
        match self {
            Enforcement::Off => "off",
            Enforcement::Warn => "warn",
            Enforcement::Fail => "fail",
        }
    }
}

impl fmt::Display for Enforcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Enforcement {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Enforcement::Off),
            "warn" | "warning" => Ok(Enforcement::Warn),
            "fail" | "error" => Ok(Enforcement::Fail),
            _ => Err(format!(
                "Invalid budget enforcement: '{s}'. Expected: off, warn, fail"
            )),
        }
    }
}

impl TryFrom<String> for Enforcement {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeBudget {
    pub max_entrypoint_bytes: u64,
    pub max_asset_bytes: u64,
    pub enforcement: Enforcement,
}

impl SizeBudget {
    /// Budget with the default enforcement policy: off in development, warn
    /// in production.
    pub fn for_request(request: BuildRequest) -> Self {
        Self::with_settings(request, &BudgetSettings::default())
    }

    pub fn with_settings(request: BuildRequest, settings: &BudgetSettings) -> Self {
        let limit = match request.target {
            Target::Edge => EDGE_LIMIT_BYTES,
            Target::Standard => STANDARD_LIMIT_BYTES,
        };
        let enforcement = match request.mode {
            Mode::Development => settings.development,
            Mode::Production => settings.production,
        };

        Self {
            max_entrypoint_bytes: limit,
            max_asset_bytes: limit,
            enforcement,
        }
    }

    /// Check measured sizes and apply the enforcement policy.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::Exceeded`] only when enforcement is
    /// [`Enforcement::Fail`] and a limit is exceeded.
    pub fn enforce(&self, sizes: &ArtifactSizes) -> std::result::Result<BudgetReport, BudgetError> {
        if self.enforcement == Enforcement::Off {
            tracing::debug!("size budget disabled, skipping check");
            return Ok(BudgetReport {
                verdict: None,
                warnings: Vec::new(),
            });
        }

        let verdict = check(sizes.entrypoint_bytes, sizes.largest_asset_bytes, self);
        let breaches = self.breaches(sizes);

        match (verdict, self.enforcement) {
            (Verdict::Exceeded, Enforcement::Fail) => {
                let (artifact, actual, limit) = breaches
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| ("entrypoint".to_string(), sizes.entrypoint_bytes, self.max_entrypoint_bytes));
                Err(BudgetError::Exceeded {
                    artifact,
                    actual,
                    limit,
                })
            }
            _ => {
                let warnings: Vec<String> = breaches
                    .into_iter()
                    .map(|(artifact, actual, limit)| {
                        format!("{artifact} is {actual} bytes, exceeding the {limit} byte budget")
                    })
                    .collect();
                for warning in &warnings {
                    tracing::warn!("{}", warning);
                }
                Ok(BudgetReport {
                    verdict: Some(verdict),
                    warnings,
                })
            }
        }
    }

    fn breaches(&self, sizes: &ArtifactSizes) -> Vec<(String, u64, u64)> {
        let mut breaches = Vec::new();
        if sizes.entrypoint_bytes > self.max_entrypoint_bytes {
            breaches.push((
                "entrypoint".to_string(),
                sizes.entrypoint_bytes,
                self.max_entrypoint_bytes,
            ));
        }
        if sizes.largest_asset_bytes > self.max_asset_bytes {
            let name = sizes.largest_asset.clone().unwrap_or_else(|| "asset".to_string());
            breaches.push((name, sizes.largest_asset_bytes, self.max_asset_bytes));
        }
        breaches
    }
}

/// Outcome of a size comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    WithinBudget,
    Exceeded,
}

/// Compare actual sizes against a budget.
///
/// A size equal to its limit is within budget. This is a pure comparison and
/// ignores the budget's enforcement.
///
/// ```
/// use mobilenovin_config::{check, BuildRequest, Mode, SizeBudget, Target, Verdict};
///
/// let budget = SizeBudget::for_request(BuildRequest::new(Mode::Production, Target::Edge));
/// assert_eq!(check(51_200, 10, &budget), Verdict::WithinBudget);
/// assert_eq!(check(51_201, 10, &budget), Verdict::Exceeded);
/// ```
pub fn check(actual_entrypoint_bytes: u64, actual_asset_bytes: u64, budget: &SizeBudget) -> Verdict {
    if actual_entrypoint_bytes > budget.max_entrypoint_bytes
        || actual_asset_bytes > budget.max_asset_bytes
    {
        Verdict::Exceeded
    } else {
        Verdict::WithinBudget
    }
}

/// Result of [`SizeBudget::enforce`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    /// `None` when enforcement is off and no check ran
    pub verdict: Option<Verdict>,
    pub warnings: Vec<String>,
}

impl BudgetReport {
    pub fn is_within_budget(&self) -> bool {
        self.verdict != Some(Verdict::Exceeded)
    }
}

/// Measured sizes of a built artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactSizes {
    pub entrypoint_bytes: u64,
    pub largest_asset_bytes: u64,
    /// Display name of the largest asset, if any were measured
    pub largest_asset: Option<String>,
}

impl ArtifactSizes {
    pub fn new(entrypoint_bytes: u64, largest_asset_bytes: u64) -> Self {
        Self {
            entrypoint_bytes,
            largest_asset_bytes,
            largest_asset: None,
        }
    }

    /// Measure an entrypoint file and its auxiliary assets on disk.
    ///
    /// Each asset is held to the per-asset limit, so only the largest one is
    /// kept.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if any file cannot be inspected.
    pub fn measure<P: AsRef<Path>>(entrypoint: &Path, assets: &[P]) -> Result<Self> {
        let entrypoint_bytes = fs::metadata(entrypoint)?.len();

        let mut largest: Option<(String, u64)> = None;
        for asset in assets {
            let asset = asset.as_ref();
            let len = fs::metadata(asset)?.len();
            if largest.as_ref().is_none_or(|(_, max)| len > *max) {
                largest = Some((asset.display().to_string(), len));
            }
        }

        let (largest_asset, largest_asset_bytes) = match largest {
            Some((name, len)) => (Some(name), len),
            None => (None, 0),
        };

        Ok(Self {
            entrypoint_bytes,
            largest_asset_bytes,
            largest_asset,
        })
    }
}
