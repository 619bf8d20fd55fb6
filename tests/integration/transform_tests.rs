use crate::fixture;
use glsl_minify::{minify_source, TransformerBuilder, TransformerConfig};

#[test]
fn test_typescript_fixture_minifies_tagged_literals() {
    let path = fixture("effects.ts");
    let source = std::fs::read_to_string(&path).unwrap();
    let builder = TransformerBuilder::new(None);

    let out = minify_source(&source, &path, &builder).unwrap();

    // Hole-free template comes back as a plain string.
    assert!(out.code.contains(
        r#""\nattribute vec2 position;varying vec2 uv;void main() {uv=position*0.5+0.5;gl_Position=vec4(position,0.0,1.0);}""#
    ));

    // Directive line keeps its newline, holes keep their expressions.
    assert!(out.code.contains("#define SAMPLES ${SAMPLES}\nuniform sampler2D image;varying vec2 uv;"));
    assert!(out.code.contains("for (int i=0; i<SAMPLES; i++) {sum+=texture2D(image,uv+float(i)*${\"0.001\"}); }\ngl_FragColor=sum/float(SAMPLES);}"));

    // Untagged template is left alone.
    assert!(out.code.contains("not a shader,   keep me"));

    assert_eq!(out.stats.literals_minified, 2);
    assert!(out.stats.bytes_after < out.stats.bytes_before);
}

#[test]
fn test_custom_prefix_fixture() {
    let path = fixture("palette.js");
    let source = std::fs::read_to_string(&path).unwrap();

    let shader = TransformerBuilder::new(Some(TransformerConfig::with_prefixes(["shader"])));
    let out = minify_source(&source, &path, &shader).unwrap();
    assert!(out.code.contains(r#""vec3 palette(float t) {return vec3(t,t*t,1.0-t);}""#));
    assert!(out.code.contains(r#""float   untouched = 1.0;""#));

    let glsl = TransformerBuilder::new(None);
    let out = minify_source(&source, &path, &glsl).unwrap();
    assert!(out.code.contains(r#""float untouched=1.0;""#));
    assert!(!out.code.contains("{return vec3"));
}

#[test]
fn test_unrelated_comment_leaves_source_as_is() {
    let source = "const a = /* note */ `\nvoid main() {\n  gl_FragColor = vec4(1.0);\n}\n`;\n";
    let builder = TransformerBuilder::new(None);

    let out = minify_source(source, std::path::Path::new("note.js"), &builder).unwrap();

    assert!(out.code.contains("\n  gl_FragColor = vec4(1.0);\n"));
    assert_eq!(out.stats.literals_minified, 0);
}

#[test]
fn test_output_is_stable_when_run_twice() {
    let path = fixture("effects.ts");
    let source = std::fs::read_to_string(&path).unwrap();
    let builder = TransformerBuilder::new(None);

    let first = minify_source(&source, &path, &builder).unwrap();
    let second = minify_source(&source, &path, &builder).unwrap();

    assert_eq!(first.code, second.code);
}
