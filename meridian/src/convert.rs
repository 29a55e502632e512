//! Single entry point converting WKT text into any of the supported output formats.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use ::geojson::Feature;

use crate::antimeridian::{AntimeridianCorrector, SplitCorrector};
use crate::error::MeridianError;
use crate::graphql::DEFAULT_OPERATION_NAME;
use crate::{geojson, graphql, wkt};

/// Output format of [`convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetFormat {
    /// WKT text.
    Wkt,
    /// GraphQL vessels query with an area-of-interest filter.
    GraphQl {
        /// Name of the query operation.
        operation_name: String,
    },
    /// GeoJSON feature.
    GeoJson,
}

impl TargetFormat {
    /// GraphQL format with the given operation name.
    pub fn graphql(operation_name: impl Into<String>) -> Self {
        Self::GraphQl {
            operation_name: operation_name.into(),
        }
    }
}

impl FromStr for TargetFormat {
    type Err = MeridianError;

    /// Accepts `wkt`, `geojson`, `graphql` and `graphql:<operation name>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wkt" => Ok(Self::Wkt),
            "geojson" => Ok(Self::GeoJson),
            "graphql" => Ok(Self::graphql(DEFAULT_OPERATION_NAME)),
            _ => match s.strip_prefix("graphql:") {
                Some(name) if !name.is_empty() => Ok(Self::graphql(name)),
                _ => Err(MeridianError::InvalidFormat(s.to_string())),
            },
        }
    }
}

impl Display for TargetFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wkt => write!(f, "wkt"),
            Self::GraphQl { operation_name } => write!(f, "graphql:{operation_name}"),
            Self::GeoJson => write!(f, "geojson"),
        }
    }
}

/// Result of [`convert`], matching the requested [`TargetFormat`].
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    /// WKT text.
    Wkt(String),
    /// GraphQL document.
    GraphQl(String),
    /// GeoJSON feature.
    GeoJson(Feature),
}

impl Display for Converted {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wkt(text) | Self::GraphQl(text) => write!(f, "{text}"),
            Self::GeoJson(feature) => {
                let json = serde_json::to_string_pretty(feature).map_err(|_| std::fmt::Error)?;
                write!(f, "{json}")
            }
        }
    }
}

/// Converts WKT text into the target format, splitting antimeridian crossings with [`SplitCorrector`] if `fix` is
/// set.
///
/// ```
/// use meridian::convert::{convert, Converted, TargetFormat};
///
/// let result = convert(
///     "POLYGON((170 10, -170 10, -170 20, 170 20, 170 10))",
///     &TargetFormat::Wkt,
///     true,
/// )
/// .unwrap();
///
/// let Converted::Wkt(text) = result else { panic!() };
/// assert!(text.starts_with("MULTIPOLYGON"));
/// ```
pub fn convert(
    wkt_text: &str,
    target: &TargetFormat,
    fix: bool,
) -> Result<Converted, MeridianError> {
    convert_with(&SplitCorrector, wkt_text, target, fix)
}

/// Same as [`convert`], but uses the given corrector.
pub fn convert_with(
    corrector: &impl AntimeridianCorrector,
    wkt_text: &str,
    target: &TargetFormat,
    fix: bool,
) -> Result<Converted, MeridianError> {
    let mut geometry = wkt::parse(wkt_text)?;
    if fix {
        geometry = corrector.correct(&geometry)?;
    }

    log::debug!(
        "Converting {} polygon(s) to {target}",
        geometry.polygon_count()
    );

    Ok(match target {
        TargetFormat::Wkt => Converted::Wkt(wkt::serialize(&geometry)),
        TargetFormat::GraphQl { operation_name } => {
            Converted::GraphQl(graphql::build(&geometry, operation_name)?)
        }
        TargetFormat::GeoJson => Converted::GeoJson(geojson::to_feature(&geometry)),
    })
}
