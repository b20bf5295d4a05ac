use std::rc::Rc;

use crate::error::ResolveError;
use crate::style::StyleProperties;

use super::{Shadow, ShadowColor, ShadowLayer};

impl Shadow {
    /// Evaluates every symbolic color against `props`.
    ///
    /// - an already resolved shadow returns another handle to itself
    /// - otherwise a new shadow is built with the same geometry and
    ///   concrete colors; `self` is left untouched
    /// - the first color that fails to resolve aborts the whole operation
    ///
    /// Re-run this whenever `props` may have changed; results are not cached
    /// across contexts.
    pub fn resolve(self: &Rc<Self>, props: &StyleProperties) -> Result<Rc<Shadow>, ResolveError> {
        if self.resolved {
            return Ok(Rc::clone(self));
        }

        let layers = self
            .layers
            .iter()
            .enumerate()
            .map(|(index, layer)| resolve_layer(index, layer, props))
            .collect::<Result<Vec<_>, _>>();

        match layers {
            Ok(layers) => {
                log::debug!("resolved shadow with {} layer(s)", layers.len());
                Ok(Rc::new(Shadow { layers, resolved: true }))
            }
            Err(err) => {
                log::debug!("shadow resolution failed: {}", err);
                Err(err)
            }
        }
    }
}

fn resolve_layer(
    index: usize,
    layer: &ShadowLayer,
    props: &StyleProperties,
) -> Result<ShadowLayer, ResolveError> {
    match layer.color() {
        ShadowColor::Concrete(color) => Ok(layer.with_concrete(*color)),
        ShadowColor::Symbolic(symbolic) => symbolic
            .resolve(props)
            .map(|color| layer.with_concrete(color))
            .ok_or_else(|| ResolveError::new(index, symbolic.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fmt;

    use super::*;
    use crate::paint::Color;
    use crate::style::{NamedColor, SymbolicColor, SymbolicColorRef};

    /// Named color that counts how often it was asked to resolve.
    #[derive(Debug)]
    struct Counting {
        inner: NamedColor,
        calls: Cell<usize>,
    }

    impl Counting {
        fn new(name: &str) -> Rc<Self> {
            Rc::new(Self { inner: NamedColor::new(name), calls: Cell::new(0) })
        }
    }

    impl SymbolicColor for Counting {
        fn resolve(&self, props: &StyleProperties) -> Option<Color> {
            self.calls.set(self.calls.get() + 1);
            self.inner.resolve(props)
        }
    }

    impl fmt::Display for Counting {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.inner, f)
        }
    }

    fn named(name: &str) -> SymbolicColorRef {
        Rc::new(NamedColor::new(name))
    }

    fn grey(v: u8) -> Color {
        Color::from_srgb_u8(v, v, v, 255)
    }

    fn props() -> StyleProperties {
        StyleProperties::new()
            .with_color("a", grey(10))
            .with_color("b", grey(20))
            .with_color("c", grey(30))
    }

    fn shadow_of(names: &[&str]) -> Rc<Shadow> {
        let mut builder = Shadow::builder();
        for (i, name) in names.iter().enumerate() {
            let i = i as i32;
            builder.append(i, i + 1, i * 2, 0, i % 2 == 1, named(name));
        }
        builder.build()
    }

    // ── success ───────────────────────────────────────────────────────────

    #[test]
    fn resolves_every_layer_in_order() {
        let resolved = shadow_of(&["a", "b", "c"]).resolve(&props()).unwrap();
        assert!(resolved.is_resolved());
        let colors: Vec<_> = resolved.layers().iter().map(|l| l.concrete_color()).collect();
        assert_eq!(colors, vec![Some(grey(10)), Some(grey(20)), Some(grey(30))]);
    }

    #[test]
    fn geometry_is_preserved() {
        let source = shadow_of(&["a", "b"]);
        let resolved = source.resolve(&props()).unwrap();
        for (before, after) in source.layers().iter().zip(resolved.layers()) {
            assert_eq!(before.hoffset(), after.hoffset());
            assert_eq!(before.voffset(), after.voffset());
            assert_eq!(before.radius(), after.radius());
            assert_eq!(before.spread(), after.spread());
            assert_eq!(before.is_inset(), after.is_inset());
        }
    }

    #[test]
    fn source_is_left_unresolved() {
        let source = shadow_of(&["a"]);
        let resolved = source.resolve(&props()).unwrap();
        assert!(!Rc::ptr_eq(&source, &resolved));
        assert!(!source.is_resolved());
        assert_eq!(source.to_css_string().as_deref(), Some("0 1 @a"));
    }

    #[test]
    fn resolved_layers_drop_symbolic_handles() {
        let color = named("a");
        let mut builder = Shadow::builder();
        builder.append(1, 1, 0, 0, false, Rc::clone(&color));
        let source = builder.build();
        let resolved = source.resolve(&props()).unwrap();
        drop(source);
        assert_eq!(Rc::strong_count(&color), 1);
        assert!(resolved.layers()[0].color().is_concrete());
    }

    #[test]
    fn resolving_a_resolved_shadow_returns_same_instance() {
        let resolved = shadow_of(&["a", "b"]).resolve(&props()).unwrap();
        let again = resolved.resolve(&StyleProperties::new()).unwrap();
        assert!(Rc::ptr_eq(&resolved, &again));
        assert_eq!(Rc::strong_count(&resolved), 2);
    }

    #[test]
    fn empty_shadow_resolves_to_empty_resolved_shadow() {
        let resolved = Shadow::builder().build().resolve(&props()).unwrap();
        assert!(resolved.is_resolved());
        assert!(resolved.is_empty());
    }

    #[test]
    fn each_resolve_consults_the_given_context() {
        let source = shadow_of(&["a"]);
        let first = source.resolve(&props()).unwrap();
        let second = source
            .resolve(&StyleProperties::new().with_color("a", grey(99)))
            .unwrap();
        assert_eq!(first.layers()[0].concrete_color(), Some(grey(10)));
        assert_eq!(second.layers()[0].concrete_color(), Some(grey(99)));
    }

    // ── failure ───────────────────────────────────────────────────────────

    #[test]
    fn failure_in_a_later_layer_fails_everything() {
        let err = shadow_of(&["a", "b", "missing", "c"]).resolve(&props()).unwrap_err();
        assert_eq!(err, ResolveError::new(2, "@missing"));
        assert_eq!(err.to_string(), "cannot resolve shadow color @missing (layer 2)");
    }

    #[test]
    fn failure_stops_before_remaining_layers() {
        let first = Counting::new("a");
        let last = Counting::new("b");
        let mut builder = Shadow::builder();
        builder
            .append(0, 0, 0, 0, false, first.clone())
            .append(0, 0, 0, 0, false, named("missing"))
            .append(0, 0, 0, 0, false, last.clone());
        let shadow = builder.build();

        assert!(shadow.resolve(&props()).is_err());
        assert_eq!(first.calls.get(), 1);
        assert_eq!(last.calls.get(), 0);
    }

    #[test]
    fn failure_releases_partial_result() {
        let color = named("a");
        let mut builder = Shadow::builder();
        builder
            .append(0, 0, 0, 0, false, Rc::clone(&color))
            .append(0, 0, 0, 0, false, named("missing"));
        let shadow = builder.build();

        assert!(shadow.resolve(&props()).is_err());
        assert_eq!(Rc::strong_count(&shadow), 1);
        assert_eq!(Rc::strong_count(&color), 2);
    }
}
