//! Parsing raw value text into typed values.

use cssparser::{ParseError, Parser, ParserInput, Token};

use super::value::{Color, Length};

/// Run `parse` over the whole of `value`; trailing tokens are a failure.
fn parse_with<'i, T>(
    value: &'i str,
    parse: impl for<'t> FnOnce(&mut Parser<'i, 't>) -> Result<T, ParseError<'i, ()>>,
) -> Option<T> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    parser.parse_entirely(parse).ok()
}

/// Parse a colour: `#rgb`, `#rrggbb`, with alpha variants, a basic colour
/// name, or `rgb()` / `rgba()` with numeric or percentage channels.
pub fn parse_color(value: &str) -> Option<Color> {
    parse_with(value, |parser| {
        let token = parser.next()?.clone();
        match token {
            Token::Hash(hex) | Token::IDHash(hex) => {
                Color::from_hex(&hex).ok_or_else(|| parser.new_custom_error(()))
            }
            Token::Ident(name) => Color::from_name(&name).ok_or_else(|| parser.new_custom_error(())),
            Token::Function(name)
                if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
            {
                parser.parse_nested_block(|p| {
                    let r = parse_channel(p)?;
                    p.expect_comma()?;
                    let g = parse_channel(p)?;
                    p.expect_comma()?;
                    let b = parse_channel(p)?;
                    let a = if p.try_parse(|p| p.expect_comma()).is_ok() {
                        parse_alpha(p)?
                    } else {
                        255
                    };
                    Ok::<_, ParseError<'_, ()>>(Color::rgba(r, g, b, a))
                })
            }
            _ => Err(parser.new_custom_error(())),
        }
    })
}

fn parse_channel<'i>(parser: &mut Parser<'i, '_>) -> Result<u8, ParseError<'i, ()>> {
    match parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 255.0).round() as u8),
        Token::Percentage { unit_value, .. } => Ok(unit_to_byte(*unit_value)),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_alpha<'i>(parser: &mut Parser<'i, '_>) -> Result<u8, ParseError<'i, ()>> {
    match parser.next()? {
        Token::Number { value, .. } => Ok(unit_to_byte(*value)),
        Token::Percentage { unit_value, .. } => Ok(unit_to_byte(*unit_value)),
        _ => Err(parser.new_custom_error(())),
    }
}

fn unit_to_byte(unit: f32) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Parse a length in `px`, `em`, `rem` or `%`, unitless `0`, or `auto`.
pub fn parse_length(value: &str) -> Option<Length> {
    parse_with(value, |parser| {
        let token = parser.next()?.clone();

        match token {
            Token::Number { value, .. } if value == 0.0 => Ok(Length::Zero),
            Token::Dimension { value, unit, .. } => match unit.to_ascii_lowercase().as_str() {
                "px" => Ok(Length::Px(value)),
                "em" => Ok(Length::Em(value)),
                "rem" => Ok(Length::Rem(value)),
                _ => Err(parser.new_custom_error(())),
            },
            Token::Percentage { unit_value, .. } => Ok(Length::Percent(unit_value * 100.0)),
            Token::Ident(s) if s.eq_ignore_ascii_case("auto") => Ok(Length::Auto),
            _ => Err(parser.new_custom_error(())),
        }
    })
}

/// Parse a plain number.
pub fn parse_number(value: &str) -> Option<f32> {
    parse_with(value, |parser| match parser.next()? {
        Token::Number { value, .. } => Ok(*value),
        _ => Err(parser.new_custom_error(())),
    })
}

/// Parse a single identifier, lower-cased.
pub fn parse_keyword(value: &str) -> Option<String> {
    parse_with(value, |parser| match parser.next()? {
        Token::Ident(name) => Ok(name.to_ascii_lowercase()),
        _ => Err(parser.new_custom_error(())),
    })
}
