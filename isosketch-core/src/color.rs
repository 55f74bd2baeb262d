/// RGB colors and a parser for the CSS color forms the sketches use
use std::fmt;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while_m_n},
    character::complete::{multispace0, u8 as decimal_u8},
    combinator::{all_consuming, map_res, value},
    sequence::{delimited, preceded},
    IResult,
};

use crate::error::IsoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::gray(0);
    pub const GRAY: Color = Color::gray(128);
    pub const WHITE: Color = Color::gray(255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Relative luminance in `[0, 1]` (Rec. 709 weights)
    pub fn luminance(&self) -> f64 {
        (0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64) / 255.0
    }

    /// Parse `black`, `white`, `gray`/`grey`, `#rgb`, `#rrggbb` or `rgb(r, g, b)`.
    pub fn parse(input: &str) -> Result<Color, IsoError> {
        match all_consuming(delimited(
            multispace0,
            alt((named_color, hex_color, rgb_color)),
            multispace0,
        ))(input)
        {
            Ok((_, color)) => Ok(color),
            Err(_) => Err(IsoError::InvalidColor(input.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = IsoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

fn named_color(input: &str) -> IResult<&str, Color> {
    alt((
        value(Color::BLACK, tag_no_case("black")),
        value(Color::WHITE, tag_no_case("white")),
        value(Color::GRAY, tag_no_case("gray")),
        value(Color::GRAY, tag_no_case("grey")),
    ))(input)
}

fn hex_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = tag("#")(input)?;
    alt((
        map_res(hex6, |digits: &str| {
            Ok::<_, std::num::ParseIntError>(Color::rgb(
                u8::from_str_radix(&digits[0..2], 16)?,
                u8::from_str_radix(&digits[2..4], 16)?,
                u8::from_str_radix(&digits[4..6], 16)?,
            ))
        }),
        // #abc is shorthand for #aabbcc
        map_res(hex3, |digits: &str| {
            let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
            Ok::<_, std::num::ParseIntError>(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        }),
    ))(input)
}

fn hex6(input: &str) -> IResult<&str, &str> {
    take_while_m_n(6, 6, |c: char| c.is_ascii_hexdigit())(input)
}

fn hex3(input: &str) -> IResult<&str, &str> {
    take_while_m_n(3, 3, |c: char| c.is_ascii_hexdigit())(input)
}

fn rgb_color(input: &str) -> IResult<&str, Color> {
    let (input, _) = tag_no_case("rgb")(input)?;
    let (input, _) = preceded(multispace0, tag("("))(input)?;
    let (input, r) = channel(input)?;
    let (input, _) = preceded(multispace0, tag(","))(input)?;
    let (input, g) = channel(input)?;
    let (input, _) = preceded(multispace0, tag(","))(input)?;
    let (input, b) = channel(input)?;
    let (input, _) = preceded(multispace0, tag(")"))(input)?;
    Ok((input, Color::rgb(r, g, b)))
}

fn channel(input: &str) -> IResult<&str, u8> {
    preceded(multispace0, decimal_u8)(input)
}
