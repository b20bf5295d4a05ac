use anyhow::{bail, Context, Result};
use umbra_style::coords::Vec2;
use umbra_style::css;
use umbra_style::style::StyleProperties;

/// Splits a `NAME=COLOR` definition.
pub fn split_definition(def: &str) -> Result<(&str, &str)> {
    let Some((name, color)) = def.split_once('=') else {
        bail!("color definition {:?} is not NAME=COLOR", def);
    };
    let name = name.trim().trim_start_matches('@');
    anyhow::ensure!(!name.is_empty(), "color definition {:?} has an empty name", def);
    Ok((name, color.trim()))
}

/// Builds the theme properties from `NAME=COLOR` definitions.
///
/// Definitions apply in order, so a color may refer to names defined before it.
pub fn build_properties<S: AsRef<str>>(defs: &[S]) -> Result<StyleProperties> {
    let mut props = StyleProperties::new();
    for def in defs {
        let (name, src) = split_definition(def.as_ref())?;
        let symbolic = css::parse_color(src).with_context(|| format!("invalid color for @{}", name))?;
        let Some(color) = symbolic.resolve(&props) else {
            bail!("color for @{} refers to an undefined name: {}", name, symbolic);
        };
        props.set_color(name, color);
    }
    Ok(props)
}

/// Parses `X,Y` into a point.
pub fn parse_origin(src: &str) -> Result<Vec2> {
    let Some((x, y)) = src.split_once(',') else {
        bail!("origin {:?} is not X,Y", src);
    };
    let x: f32 = x.trim().parse().with_context(|| format!("invalid x in origin {:?}", src))?;
    let y: f32 = y.trim().parse().with_context(|| format!("invalid y in origin {:?}", src))?;
    Ok(Vec2::new(x, y))
}
