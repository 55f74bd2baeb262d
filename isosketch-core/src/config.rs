/// Sketch descriptors: `name[:key=value,...]`
///
/// For example `cube:spin=true` or `shape:slices=4,curve=eased:3,timing=staggered:0.25`.
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, multispace0, u32 as decimal_u32},
    combinator::{all_consuming, map, opt, value},
    multi::separated_list1,
    number::complete::double,
    sequence::{preceded, separated_pair},
    IResult,
};

use crate::error::{IsoError, Result};
use crate::sketch::{
    ColorScheme, CubeConfig, HeightCurve, ShapeConfig, SketchKind, SplitTiming,
};

/// A sketch and its settings
#[derive(Debug, Clone, PartialEq)]
pub enum SketchConfig {
    Cube(CubeConfig),
    Shape(ShapeConfig),
}

impl SketchConfig {
    pub fn kind(&self) -> SketchKind {
        match self {
            SketchConfig::Cube(_) => SketchKind::Cube,
            SketchConfig::Shape(_) => SketchKind::Shape,
        }
    }

    /// Parse a descriptor. Missing keys keep their defaults.
    pub fn parse(input: &str) -> Result<Self> {
        let (name, pairs) = match all_consuming(descriptor)(input) {
            Ok((_, parsed)) => parsed,
            Err(e) => {
                return Err(IsoError::InvalidConfig(format!(
                    "malformed descriptor {input:?}: {e:?}"
                )))
            }
        };

        let mut config = match name {
            "cube" => SketchConfig::Cube(CubeConfig::default()),
            "shape" => SketchConfig::Shape(ShapeConfig::default()),
            other => {
                return Err(IsoError::InvalidConfig(format!("unknown sketch {other:?}")));
            }
        };
        for (key, raw) in pairs {
            config.apply(key, raw)?;
        }

        log::debug!("parsed descriptor {input:?} into {config:?}");
        Ok(config)
    }

    fn apply(&mut self, key: &str, raw: &str) -> Result<()> {
        match (self, key) {
            (SketchConfig::Cube(c), "period") => c.period = number(key, raw)?,
            (SketchConfig::Cube(c), "scale") => c.scale = number(key, raw)?,
            (SketchConfig::Cube(c), "xz") => c.view.xz = number(key, raw)?,
            (SketchConfig::Cube(c), "y") => c.view.y = number(key, raw)?,
            (SketchConfig::Cube(c), "spin") => c.spin = flag(key, raw)?,

            (SketchConfig::Shape(s), "period") => s.period = number(key, raw)?,
            (SketchConfig::Shape(s), "scale") => s.scale = number(key, raw)?,
            (SketchConfig::Shape(s), "xz") => s.view.xz = number(key, raw)?,
            (SketchConfig::Shape(s), "y") => s.view.y = number(key, raw)?,
            (SketchConfig::Shape(s), "height") => s.height = number(key, raw)?,
            (SketchConfig::Shape(s), "slices") => s.slices = count(key, raw)?,
            (SketchConfig::Shape(s), "curve") => s.curve = whole(key, raw, height_curve)?,
            (SketchConfig::Shape(s), "timing") => s.timing = whole(key, raw, split_timing)?,
            (SketchConfig::Shape(s), "colors") => s.colors = whole(key, raw, color_scheme)?,

            (config, _) => {
                return Err(IsoError::InvalidConfig(format!(
                    "{} sketch has no setting {key:?}",
                    config.kind().name()
                )));
            }
        }
        Ok(())
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        SketchConfig::Cube(CubeConfig::default())
    }
}

fn descriptor(input: &str) -> IResult<&str, (&str, Vec<(&str, &str)>)> {
    let (input, name) = preceded(multispace0, alpha1)(input)?;
    let (input, pairs) = opt(preceded(tag(":"), separated_list1(tag(","), setting)))(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, (name, pairs.unwrap_or_default())))
}

fn setting(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        preceded(multispace0, alpha1),
        preceded(multispace0, tag("=")),
        preceded(
            multispace0,
            take_while1(|c: char| c != ',' && !c.is_whitespace()),
        ),
    )(input)
}

/// Run `parser` over the whole of `raw`
fn whole<'a, T>(
    key: &str,
    raw: &'a str,
    parser: impl FnMut(&'a str) -> IResult<&'a str, T>,
) -> Result<T> {
    match all_consuming(parser)(raw) {
        Ok((_, parsed)) => Ok(parsed),
        Err(_) => Err(IsoError::InvalidConfig(format!(
            "bad value {raw:?} for {key:?}"
        ))),
    }
}

fn number(key: &str, raw: &str) -> Result<f64> {
    whole(key, raw, double)
}

fn count(key: &str, raw: &str) -> Result<usize> {
    whole(key, raw, decimal_u32).map(|n| n as usize)
}

fn flag(key: &str, raw: &str) -> Result<bool> {
    whole(key, raw, |input| {
        alt((value(true, tag("true")), value(false, tag("false"))))(input)
    })
}

fn height_curve(input: &str) -> IResult<&str, HeightCurve> {
    alt((
        value(HeightCurve::Linear, tag("linear")),
        map(preceded(tag("eased:"), decimal_u32), |power| {
            HeightCurve::Eased { power }
        }),
        map(preceded(tag("pingpong:"), decimal_u32), |power| {
            HeightCurve::PingPong { power }
        }),
    ))(input)
}

fn split_timing(input: &str) -> IResult<&str, SplitTiming> {
    alt((
        value(SplitTiming::Together, tag("together")),
        map(preceded(tag("staggered:"), double), |overlap| {
            SplitTiming::Staggered { overlap }
        }),
    ))(input)
}

fn color_scheme(input: &str) -> IResult<&str, ColorScheme> {
    alt((
        value(ColorScheme::Outline, tag("outline")),
        value(ColorScheme::PhaseShaded, tag("phase")),
        map(
            preceded(
                alt((tag("gray"), tag("grey"))),
                opt(separated_pair(
                    preceded(tag(":"), double),
                    tag(":"),
                    double,
                )),
            ),
            |levels| {
                let (top, side) = levels.unwrap_or((0.9, 0.6));
                ColorScheme::Grayscale { top, side }
            },
        ),
    ))(input)
}
