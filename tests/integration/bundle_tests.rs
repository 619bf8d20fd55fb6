use crate::fixture;
use glsl_minify::process::parse_unit;
use glsl_minify::{minify_sources, Bundle, SourceFileOrBundle, TransformerBuilder};
use oxc_allocator::Allocator;
use std::path::PathBuf;

#[test]
fn test_bundle_of_fixtures_keeps_order() {
    let sources: Vec<(PathBuf, String)> = ["palette.js", "effects.ts"]
        .iter()
        .map(|name| {
            let path = fixture(name);
            let source = std::fs::read_to_string(&path).unwrap();
            (path, source)
        })
        .collect();
    let builder = TransformerBuilder::new(None);

    let out = minify_sources(&sources, &builder).unwrap();

    assert_eq!(out.len(), 2);
    assert!(out[0].path.ends_with("palette.js"));
    assert!(out[1].path.ends_with("effects.ts"));
    assert_eq!(out[0].stats.literals_minified, 1);
    assert_eq!(out[1].stats.literals_minified, 2);
}

#[test]
fn test_transform_accepts_bundle_shape() {
    let allocator = Allocator::default();
    let builder = TransformerBuilder::default();
    let transformer = builder.make_transformer(&allocator);

    let units = vec![
        parse_unit(&allocator, "const a = /* glsl */ 'x = 1;';", "a.js".as_ref()).unwrap(),
        parse_unit(&allocator, "const b = /* glsl */ `y = ${z};`;", "b.js".as_ref()).unwrap(),
    ];

    match transformer.transform(SourceFileOrBundle::Bundle(Bundle::new(units))) {
        SourceFileOrBundle::Bundle(bundle) => {
            assert_eq!(bundle.units.len(), 2);
            assert_eq!(bundle.stats().literals_minified, 2);
        }
        SourceFileOrBundle::SourceFile(_) => panic!("expected a bundle"),
    }
}

#[test]
fn test_parse_error_names_the_file() {
    let sources = vec![(PathBuf::from("broken.ts"), "const = ;".to_string())];
    let builder = TransformerBuilder::new(None);

    let err = minify_sources(&sources, &builder).unwrap_err();
    assert!(err.format_detailed().contains("broken.ts"));
}
