//! RGB pixel value, channel accessors, and the `(r, g, b)` text format.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use core::str::FromStr;

/// An integer RGB triple.
///
/// Components are plain `i32` with no range restriction: arithmetic can
/// leave `0..=255` (differences, negation, accumulators) and [`Rgb::is_valid`]
/// tells whether the value is still a displayable 8-bit color.
///
/// Ordering is lexicographic by `(b, g, r)`. It exists for deterministic
/// sorting, not perceptual comparison.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const CYAN: Self = Self::new(0, 255, 255);
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    pub const ORANGE: Self = Self::new(255, 165, 0);
    pub const PURPLE: Self = Self::new(128, 0, 128);

    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Gray level `v` in all three channels.
    pub const fn gray(v: i32) -> Self {
        Self::new(v, v, v)
    }

    /// Whether every component fits in `0..=255`.
    pub fn is_valid(self) -> bool {
        (0..=255).contains(&self.r) && (0..=255).contains(&self.g) && (0..=255).contains(&self.b)
    }

    pub fn is_black(self) -> bool {
        self == Self::BLACK
    }

    /// Mean of the three components, truncated.
    pub fn intensity(self) -> i32 {
        (self.r + self.g + self.b) / 3
    }

    /// Whether no component differs from `other` by more than one.
    pub fn is_continuous_with(self, other: Self) -> bool {
        (self.r - other.r).abs() <= 1 && (self.g - other.g).abs() <= 1 && (self.b - other.b).abs() <= 1
    }

    /// Whether all three components differ from `other`.
    pub fn differs_in_all(self, other: Self) -> bool {
        self.r != other.r && self.g != other.g && self.b != other.b
    }

    /// Component-wise negation.
    pub fn negate(self) -> Self {
        -self
    }

    /// Component-wise multiplication by `k`, no clamping.
    pub fn scale(self, k: i32) -> Self {
        self * k
    }

    /// Parse one pixel from the front of `s`, returning it with the rest of
    /// the input.
    ///
    /// Leading whitespace and whitespace between tokens are skipped. On error
    /// nothing is consumed: the caller still holds the original `s`.
    ///
    /// ```
    /// use zenraster::Rgb;
    ///
    /// let (p, rest) = Rgb::parse_prefix("(1, 2, 3) (4, 5, 6)").unwrap();
    /// assert_eq!(p, Rgb::new(1, 2, 3));
    /// assert_eq!(rest, " (4, 5, 6)");
    /// ```
    pub fn parse_prefix(s: &str) -> Result<(Self, &str), ParsePixelError> {
        let rest = s.trim_start();
        if rest.is_empty() {
            return Err(ParsePixelError::Empty);
        }
        let rest = expect_char(rest, '(', ParsePixelError::ExpectedOpen)?;
        let (r, rest) = component(rest)?;
        let rest = expect_char(rest, ',', ParsePixelError::ExpectedComma)?;
        let (g, rest) = component(rest)?;
        let rest = expect_char(rest, ',', ParsePixelError::ExpectedComma)?;
        let (b, rest) = component(rest)?;
        let rest = expect_char(rest, ')', ParsePixelError::ExpectedClose)?;
        Ok((Self::new(r, g, b), rest))
    }
}

fn expect_char(s: &str, c: char, err: ParsePixelError) -> Result<&str, ParsePixelError> {
    s.trim_start().strip_prefix(c).ok_or(err)
}

fn component(s: &str) -> Result<(i32, &str), ParsePixelError> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(ParsePixelError::InvalidComponent);
    }
    let (num, rest) = s.split_at(sign_len + digits);
    let v = num.parse().map_err(|_| ParsePixelError::InvalidComponent)?;
    Ok((v, rest))
}

/// Why a pixel could not be parsed from text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParsePixelError {
    /// Input was empty or only whitespace.
    #[error("no pixel in input")]
    Empty,
    #[error("expected '('")]
    ExpectedOpen,
    #[error("expected ','")]
    ExpectedComma,
    #[error("expected ')'")]
    ExpectedClose,
    /// A component was missing or did not fit in an `i32`.
    #[error("invalid color component")]
    InvalidComponent,
    /// Something other than whitespace followed the closing parenthesis.
    #[error("unexpected input after pixel")]
    TrailingInput,
}

impl FromStr for Rgb {
    type Err = ParsePixelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (p, rest) = Self::parse_prefix(s)?;
        if rest.trim().is_empty() {
            Ok(p)
        } else {
            Err(ParsePixelError::TrailingInput)
        }
    }
}

fn fmt_component(f: &mut fmt::Formatter<'_>, v: i32) -> fmt::Result {
    if v < 0 {
        write!(f, "{v:>3}")
    } else {
        write!(f, "{v:03}")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt_component(f, self.r)?;
        f.write_str(", ")?;
        fmt_component(f, self.g)?;
        f.write_str(", ")?;
        fmt_component(f, self.b)?;
        f.write_str(")")
    }
}

impl Ord for Rgb {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.b, self.g, self.r).cmp(&(other.b, other.g, other.r))
    }
}

impl PartialOrd for Rgb {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Rgb {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self::new(self.r + o.r, self.g + o.g, self.b + o.b)
    }
}

impl Sub for Rgb {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Self::new(self.r - o.r, self.g - o.g, self.b - o.b)
    }
}

impl Neg for Rgb {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.r, -self.g, -self.b)
    }
}

impl Mul<i32> for Rgb {
    type Output = Self;
    fn mul(self, k: i32) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }
}

/// Integer division per component, truncating toward zero.
impl Div<i32> for Rgb {
    type Output = Self;
    fn div(self, k: i32) -> Self {
        Self::new(self.r / k, self.g / k, self.b / k)
    }
}

impl AddAssign for Rgb {
    fn add_assign(&mut self, o: Self) {
        *self = *self + o;
    }
}

impl SubAssign for Rgb {
    fn sub_assign(&mut self, o: Self) {
        *self = *self - o;
    }
}

/// One of the three color components of an [`Rgb`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    pub fn get(self, p: &Rgb) -> &i32 {
        match self {
            Self::Red => &p.r,
            Self::Green => &p.g,
            Self::Blue => &p.b,
        }
    }

    pub fn get_mut(self, p: &mut Rgb) -> &mut i32 {
        match self {
            Self::Red => &mut p.r,
            Self::Green => &mut p.g,
            Self::Blue => &mut p.b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_pads_components() {
        assert_eq!(Rgb::new(1, 22, 255).to_string(), "(001, 022, 255)");
        assert_eq!(Rgb::new(-5, 0, 1000).to_string(), "( -5, 000, 1000)");
    }

    #[test]
    fn text_round_trip() {
        for &(r, g, b) in &[(0, 0, 0), (255, 128, 7), (-300, 42, -1), (1000, -1000, 999)] {
            let p = Rgb::new(r, g, b);
            let back: Rgb = p.to_string().parse().unwrap();
            assert_eq!(back, p, "round-trip failed for {p:?}");
        }
    }

    #[test]
    fn parse_tolerates_whitespace() {
        assert_eq!("  ( 1 ,2,  3 )  ".parse::<Rgb>(), Ok(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn parse_reports_missing_delimiters() {
        assert_eq!("".parse::<Rgb>(), Err(ParsePixelError::Empty));
        assert_eq!("1, 2, 3)".parse::<Rgb>(), Err(ParsePixelError::ExpectedOpen));
        assert_eq!("(1 2, 3)".parse::<Rgb>(), Err(ParsePixelError::ExpectedComma));
        assert_eq!("(1, 2, 3".parse::<Rgb>(), Err(ParsePixelError::ExpectedClose));
        assert_eq!("(1, x, 3)".parse::<Rgb>(), Err(ParsePixelError::InvalidComponent));
        assert_eq!("(1, -, 3)".parse::<Rgb>(), Err(ParsePixelError::InvalidComponent));
        assert_eq!("(1, 2, 3) x".parse::<Rgb>(), Err(ParsePixelError::TrailingInput));
    }

    #[test]
    fn parse_prefix_reads_a_sequence() {
        let mut input = "(1, 2, 3)(4, 5, 6)\n(7, 8, 9)";
        let mut got = alloc::vec::Vec::new();
        while let Ok((p, rest)) = Rgb::parse_prefix(input) {
            got.push(p);
            input = rest;
        }
        assert_eq!(got, [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6), Rgb::new(7, 8, 9)]);
        assert!(input.is_empty());
    }

    #[test]
    fn ordering_is_bgr() {
        assert!(Rgb::new(255, 0, 0) < Rgb::new(0, 0, 1));
        assert!(Rgb::new(0, 1, 5) < Rgb::new(9, 2, 5));
        assert!(Rgb::new(1, 2, 5) < Rgb::new(2, 2, 5));
    }

    #[test]
    fn arithmetic_does_not_clamp() {
        let d = Rgb::new(10, 20, 30) - Rgb::new(20, 20, 20);
        assert_eq!(d, Rgb::new(-10, 0, 10));
        assert!(!d.is_valid());
        assert_eq!(d.negate(), Rgb::new(10, 0, -10));
        assert_eq!(Rgb::new(100, 1, 2).scale(3), Rgb::new(300, 3, 6));
        assert_eq!(Rgb::new(9, -9, 4) / 2, Rgb::new(4, -4, 2));
    }

    #[test]
    fn predicates() {
        assert!(Rgb::default().is_black());
        assert_eq!(Rgb::new(3, 4, 5).intensity(), 4);
        assert!(Rgb::new(3, 4, 5).is_continuous_with(Rgb::new(4, 3, 5)));
        assert!(!Rgb::new(3, 4, 5).is_continuous_with(Rgb::new(5, 4, 5)));
        assert!(Rgb::new(1, 2, 3).differs_in_all(Rgb::new(2, 3, 4)));
        assert!(!Rgb::new(1, 2, 3).differs_in_all(Rgb::new(2, 2, 4)));
    }

    #[test]
    fn channel_accessors() {
        let mut p = Rgb::new(1, 2, 3);
        *Channel::Green.get_mut(&mut p) = 20;
        assert_eq!(p, Rgb::new(1, 20, 3));
        assert_eq!(*Channel::Blue.get(&p), 3);
    }
}
