use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

/// A single pixel colour.
///
/// Both variants share the four channel layout red, green, blue, alpha. A
/// grey colour keeps its intensity in the alpha slot of that layout, so the
/// channel accessors of a grey colour read `[0, 0, 0, intensity]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    Grey {
        intensity: u8,
    },
    Rgb {
        red: u8,
        green: u8,
        blue: u8,
        alpha: u8,
    },
}

impl Default for Colour {
    fn default() -> Self {
        Colour::Rgb {
            red: 0,
            green: 0,
            blue: 0,
            alpha: 0,
        }
    }
}

impl Colour {
    pub fn grey(intensity: u8) -> Self {
        Colour::Grey { intensity }
    }

    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 0)
    }

    pub fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Colour::Rgb {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Rgb colour with only the alpha slot set, red, green and blue stay zero.
    pub fn rgb_from_alpha(alpha: u8) -> Self {
        Self::rgba(0, 0, 0, alpha)
    }

    pub fn red(&self) -> u8 {
        self.channels()[0]
    }

    pub fn green(&self) -> u8 {
        self.channels()[1]
    }

    pub fn blue(&self) -> u8 {
        self.channels()[2]
    }

    pub fn alpha(&self) -> u8 {
        self.channels()[3]
    }

    pub fn channels(&self) -> [u8; 4] {
        match *self {
            Colour::Grey { intensity } => [0, 0, 0, intensity],
            Colour::Rgb {
                red,
                green,
                blue,
                alpha,
            } => [red, green, blue, alpha],
        }
    }

    /// Distance between `self` and `other`. The metric is picked by the
    /// variant of `self` only: grey compares the alpha slots, rgb sums the
    /// absolute differences of all four channels.
    pub fn difference(&self, other: &Colour) -> f64 {
        match self {
            Colour::Grey { intensity } => channel_difference(*intensity, other.alpha()),
            Colour::Rgb { .. } => self
                .channels()
                .iter()
                .zip(other.channels().iter())
                .map(|(&lhs, &rhs)| channel_difference(lhs, rhs))
                .sum(),
        }
    }

    pub fn is_similar(&self, other: &Colour, tolerance: f64) -> bool {
        self.difference(other) <= tolerance
    }
}

fn channel_difference(lhs: u8, rhs: u8) -> f64 {
    (i16::from(lhs) - i16::from(rhs)).abs().into()
}

const GREY_NOTATION: &str = "grey";
const GRAY_NOTATION: &str = "gray";
const RGB_NOTATION: &str = "rgb";
const RGBA_NOTATION: &str = "rgba";
const HEX_NOTATION: &str = "#";

impl FromStr for Colour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(digits) = s.strip_prefix(HEX_NOTATION) {
            return parse_hex(digits);
        }
        let (notation, values) = s
            .split_once(':')
            .ok_or_else(|| Error::UnknownColourNotation(s.to_owned()))?;
        let notation = notation.trim().to_ascii_lowercase();
        match notation.as_str() {
            GREY_NOTATION | GRAY_NOTATION => {
                let [intensity] = parse_decimal_channels::<1>(GREY_NOTATION, values)?;
                Ok(Colour::grey(intensity))
            }
            RGB_NOTATION => {
                let [red, green, blue] = parse_decimal_channels::<3>(RGB_NOTATION, values)?;
                Ok(Colour::rgb(red, green, blue))
            }
            RGBA_NOTATION => {
                let [red, green, blue, alpha] =
                    parse_decimal_channels::<4>(RGBA_NOTATION, values)?;
                Ok(Colour::rgba(red, green, blue, alpha))
            }
            _ => Err(Error::UnknownColourNotation(s.to_owned())),
        }
    }
}

fn parse_decimal_channels<const N: usize>(
    notation: &'static str,
    values: &str,
) -> crate::Result<[u8; N]> {
    let tokens: Vec<&str> = values.split(',').map(str::trim).collect();
    if tokens.len() != N {
        return Err(Error::WrongNumberOfChannels {
            notation,
            expected: N,
            found: tokens.len(),
        });
    }
    let mut channels = [0_u8; N];
    for (channel, token) in channels.iter_mut().zip(tokens) {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidChannelValue(token.to_owned()));
        }
        *channel = token
            .parse::<u8>()
            .map_err(|_| Error::InvalidChannelValue(token.to_owned()))?;
    }
    Ok(channels)
}

fn parse_hex(digits: &str) -> crate::Result<Colour> {
    let number_of_digits = digits.chars().count();
    if number_of_digits != 6 && number_of_digits != 8 {
        return Err(Error::WrongNumberOfHexDigits(number_of_digits));
    }
    let channels = digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let text = String::from_utf8_lossy(pair).into_owned();
            if !pair.iter().all(u8::is_ascii_hexdigit) {
                return Err(Error::InvalidChannelValue(text));
            }
            u8::from_str_radix(&text, 16).map_err(|_| Error::InvalidChannelValue(text))
        })
        .collect::<crate::Result<Vec<u8>>>()?;
    match channels[..] {
        [red, green, blue] => Ok(Colour::rgb(red, green, blue)),
        [red, green, blue, alpha] => Ok(Colour::rgba(red, green, blue, alpha)),
        _ => Err(Error::WrongNumberOfHexDigits(number_of_digits)),
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Colour::Grey { intensity } => write!(f, "{}:{}", GREY_NOTATION, intensity),
            Colour::Rgb {
                red,
                green,
                blue,
                alpha: 0,
            } => write!(f, "{}:{},{},{}", RGB_NOTATION, red, green, blue),
            Colour::Rgb {
                red,
                green,
                blue,
                alpha,
            } => write!(f, "{}:{},{},{},{}", RGBA_NOTATION, red, green, blue, alpha),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Colour;
    use crate::error::Error;

    #[test]
    fn default_colour_is_black_and_transparent() {
        let colour = Colour::default();
        assert_eq!(colour.channels(), [0, 0, 0, 0]);
        assert_eq!(colour.difference(&colour), 0_f64);
    }

    #[test]
    fn grey_stores_intensity_in_alpha_slot() {
        let colour = Colour::grey(77);
        assert_eq!(colour.channels(), [0, 0, 0, 77]);
        assert_eq!(colour.alpha(), 77);
        assert_eq!(colour.red(), 0);
    }

    #[test]
    fn rgb_leaves_alpha_at_zero() {
        let colour = Colour::rgb(10, 20, 30);
        assert_eq!(colour.red(), 10);
        assert_eq!(colour.green(), 20);
        assert_eq!(colour.blue(), 30);
        assert_eq!(colour.alpha(), 0);
    }

    #[test]
    fn rgb_from_alpha_sets_only_alpha() {
        let colour = Colour::rgb_from_alpha(200);
        assert_eq!(colour.channels(), [0, 0, 0, 200]);
        assert!(matches!(colour, Colour::Rgb { .. }));
    }

    #[test]
    fn grey_difference() {
        let result = Colour::grey(10).difference(&Colour::grey(200));
        assert_eq!(result, 190_f64, "grey difference is wrong");
        let result = Colour::grey(200).difference(&Colour::grey(10));
        assert_eq!(result, 190_f64, "grey difference is not symmetric");
    }

    #[test]
    fn grey_difference_for_all_intensities() {
        for x in 0..=u8::MAX {
            for y in [0_u8, 1, 127, 128, 254, 255] {
                let expected = (f64::from(x) - f64::from(y)).abs();
                assert_eq!(Colour::grey(x).difference(&Colour::grey(y)), expected);
            }
        }
    }

    #[test]
    fn rgb_difference() {
        let result = Colour::rgb(10, 20, 30).difference(&Colour::rgb(1, 2, 3));
        assert_eq!(result, 54_f64, "rgb difference is wrong");
    }

    #[test]
    fn rgb_difference_without_wraparound() {
        let result = Colour::rgb(0, 255, 0).difference(&Colour::rgb(255, 0, 255));
        assert_eq!(result, 765_f64);
    }

    #[test]
    fn rgba_difference_at_extremes() {
        let result = Colour::rgba(255, 255, 255, 255).difference(&Colour::default());
        assert_eq!(result, 1020_f64);
        let result = Colour::grey(255).difference(&Colour::grey(0));
        assert_eq!(result, 255_f64);
    }

    #[test]
    fn difference_with_itself_is_zero() {
        let colours = [
            Colour::default(),
            Colour::grey(42),
            Colour::rgb(1, 2, 3),
            Colour::rgba(255, 0, 128, 7),
            Colour::rgb_from_alpha(99),
        ];
        for colour in colours {
            assert_eq!(colour.difference(&colour), 0_f64, "{} differs from itself", colour);
        }
    }

    #[test]
    fn difference_dispatches_on_left_operand() {
        let grey = Colour::grey(50);
        let rgb = Colour::rgba(100, 100, 100, 20);
        assert_eq!(grey.difference(&rgb), 30_f64, "grey must only compare alpha");
        assert_eq!(rgb.difference(&grey), 330_f64, "rgb must compare all channels");
    }

    #[test]
    fn copies_are_independent() {
        let original = Colour::rgb(1, 2, 3);
        let mut copy = original;
        if let Colour::Rgb { red, .. } = &mut copy {
            *red = 99;
        }
        assert_eq!(original, Colour::rgb(1, 2, 3));
        assert_eq!(copy, Colour::rgb(99, 2, 3));
    }

    #[test]
    fn similarity_uses_inclusive_tolerance() {
        let colour = Colour::rgb(10, 10, 10);
        assert!(colour.is_similar(&Colour::rgb(12, 10, 10), 2.0));
        assert!(!colour.is_similar(&Colour::rgb(13, 10, 10), 2.0));
    }

    #[test]
    fn parse_decimal_notations() {
        assert_eq!("grey:10".parse::<Colour>().unwrap(), Colour::grey(10));
        assert_eq!("gray: 10".parse::<Colour>().unwrap(), Colour::grey(10));
        assert_eq!(
            " rgb:10, 20 ,30 ".parse::<Colour>().unwrap(),
            Colour::rgb(10, 20, 30)
        );
        assert_eq!(
            "RGBA:1,2,3,4".parse::<Colour>().unwrap(),
            Colour::rgba(1, 2, 3, 4)
        );
    }

    #[test]
    fn parse_hex_notation() {
        assert_eq!(
            "#0a141e".parse::<Colour>().unwrap(),
            Colour::rgb(10, 20, 30)
        );
        assert_eq!(
            "#0A141E80".parse::<Colour>().unwrap(),
            Colour::rgba(10, 20, 30, 128)
        );
    }

    #[test]
    fn parse_unknown_notation() {
        let result = "hsl:1,2,3".parse::<Colour>();
        assert!(matches!(result, Err(Error::UnknownColourNotation(_))));
        let result = "red".parse::<Colour>();
        assert!(matches!(result, Err(Error::UnknownColourNotation(_))));
    }

    #[test]
    fn parse_wrong_number_of_channels() {
        let result = "rgb:1,2".parse::<Colour>();
        match result {
            Err(Error::WrongNumberOfChannels {
                expected, found, ..
            }) => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            _ => panic!("Wrong channel count not detected"),
        }
    }

    #[test]
    fn parse_wrong_number_of_hex_digits() {
        let result = "#12345".parse::<Colour>();
        assert!(matches!(result, Err(Error::WrongNumberOfHexDigits(5))));
        let result = "#1234567".parse::<Colour>();
        assert!(matches!(result, Err(Error::WrongNumberOfHexDigits(7))));
        let result = "#ééé".parse::<Colour>();
        assert!(matches!(result, Err(Error::WrongNumberOfHexDigits(3))));
    }

    #[test]
    fn parse_signed_channels() {
        let result = "#+f+f+f".parse::<Colour>();
        assert!(
            matches!(result, Err(Error::InvalidChannelValue(ref v)) if v == "+f"),
            "signed hex pair accepted: {:?}",
            result
        );
        let result = "rgb:+1,2,3".parse::<Colour>();
        assert!(
            matches!(result, Err(Error::InvalidChannelValue(ref v)) if v == "+1"),
            "signed decimal channel accepted: {:?}",
            result
        );
        let result = "grey:-0".parse::<Colour>();
        assert!(matches!(result, Err(Error::InvalidChannelValue(_))));
        let result = "rgb:1,,3".parse::<Colour>();
        assert!(matches!(result, Err(Error::InvalidChannelValue(ref v)) if v.is_empty()));
    }

    #[test]
    fn parse_out_of_range_channel() {
        let result = "grey:256".parse::<Colour>();
        assert!(matches!(result, Err(Error::InvalidChannelValue(ref v)) if v == "256"));
        let result = "#zz0000".parse::<Colour>();
        assert!(matches!(result, Err(Error::InvalidChannelValue(ref v)) if v == "zz"));
    }

    #[test]
    fn display_parses_back() {
        let colours = [
            Colour::default(),
            Colour::grey(3),
            Colour::rgb(4, 5, 6),
            Colour::rgba(7, 8, 9, 10),
        ];
        for colour in colours {
            let text = colour.to_string();
            assert_eq!(text.parse::<Colour>().unwrap(), colour, "{} did not parse back", text);
        }
        assert_eq!(Colour::rgb(4, 5, 6).to_string(), "rgb:4,5,6");
    }
}
