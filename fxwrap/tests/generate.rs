//! End-to-end generation tests across both output languages.

use fxwrap::{
    Color, ConstantRegister, DefaultValue, Generator, Indent, OutputLanguage, Point3D,
    RegisterType, Settings, ShaderModel, Vector, generate,
};

const LANGUAGES: [OutputLanguage; 2] = [OutputLanguage::CSharp, OutputLanguage::VisualBasic];

fn blur() -> ShaderModel {
    ShaderModel::new("Effects.Generated", "BlurEffect").with_register(
        ConstantRegister::new("Radius", RegisterType::Float, 1)
            .with_default(DefaultValue::Float(5.0)),
    )
}

fn mixed() -> ShaderModel {
    ShaderModel::new("Effects", "MixedEffect")
        .with_register(ConstantRegister::new("Overlay", RegisterType::Sampler, 1))
        .with_register(
            ConstantRegister::new("Offset", RegisterType::Vector, 1)
                .with_default(DefaultValue::Vector(Vector::new(1.5, -2.0))),
        )
        .with_register(
            ConstantRegister::new("Origin", RegisterType::Point3D, 2)
                .with_default(DefaultValue::Point3D(Point3D::new(0.0, 1.0, 2.0))),
        )
        .with_register(
            ConstantRegister::new("Tint", RegisterType::Color, 3)
                .with_default(DefaultValue::Color(Color::WHITE)),
        )
        .with_register(
            ConstantRegister::new("Weight", RegisterType::Double, 4)
                .with_default(DefaultValue::opaque("Double")),
        )
}

fn render(model: &ShaderModel, external: bool, language: OutputLanguage) -> String {
    generate(model, external, language, Indent::default()).unwrap()
}

/// Arguments of every update call, in emission order.
fn update_calls(code: &str) -> Vec<String> {
    code.lines()
        .filter_map(|line| {
            let line = line.trim();
            let rest = line
                .strip_prefix("this.UpdateShaderValue(")
                .or_else(|| line.strip_prefix("Me.UpdateShaderValue("))?;
            Some(rest.trim_end_matches(';').trim_end_matches(')').to_string())
        })
        .collect()
}

/// Declarations of descriptor fields.
fn descriptor_lines(code: &str) -> Vec<&str> {
    code.lines()
        .filter(|line| line.contains("Property = ") && line.contains("DependencyProperty"))
        .collect()
}

#[test]
fn test_fixtures_are_valid_models() {
    assert_eq!(blur().validate(), Ok(()));
    assert_eq!(mixed().validate(), Ok(()));
}

#[test]
fn test_zero_registers_expose_only_input() {
    let model = ShaderModel::new("Effects", "Plain");
    for language in LANGUAGES {
        for external in [false, true] {
            let code = render(&model, external, language);
            let descriptors = descriptor_lines(&code);
            assert_eq!(descriptors.len(), 1, "{language}");
            assert!(descriptors[0].contains("InputProperty"));
            assert_eq!(update_calls(&code), ["InputProperty"]);
        }
    }
}

#[test]
fn test_update_order_matches_register_order() {
    let expected = [
        "InputProperty",
        "OverlayProperty",
        "OffsetProperty",
        "OriginProperty",
        "TintProperty",
        "WeightProperty",
    ];
    for language in LANGUAGES {
        for external in [false, true] {
            assert_eq!(update_calls(&render(&mixed(), external, language)), expected);
        }
    }
}

#[test]
fn test_sampler_registration_has_no_metadata() {
    for language in LANGUAGES {
        let code = render(&mixed(), false, language);
        for line in descriptor_lines(&code) {
            let is_sampler = line.contains("InputProperty") || line.contains("OverlayProperty");
            assert_eq!(line.contains("RegisterPixelShaderSamplerProperty"), is_sampler, "{line}");
            assert_eq!(line.contains("UIPropertyMetadata"), !is_sampler, "{line}");
            assert_eq!(line.contains("PixelShaderConstantCallback"), !is_sampler, "{line}");
        }
    }
}

#[test]
fn test_descriptors_are_readonly_exactly_once() {
    for language in LANGUAGES {
        let code = render(&mixed(), false, language);
        let descriptors = descriptor_lines(&code);
        assert_eq!(descriptors.len(), 6);
        for line in descriptors {
            assert_eq!(line.to_lowercase().matches("readonly").count(), 1, "{line}");
        }
    }
}

#[test]
fn test_default_literals() {
    let cs = render(&mixed(), false, OutputLanguage::CSharp);
    assert!(cs.contains("new Vector(1.5D, -2D)"));
    assert!(cs.contains("new Point3D(0D, 1D, 2D)"));
    assert!(cs.contains("Color.FromArgb(255, 255, 255, 255)"));
    assert!(cs.contains("new UIPropertyMetadata(default(Double), PixelShaderConstantCallback(4))"));

    let vb = render(&mixed(), false, OutputLanguage::VisualBasic);
    assert!(vb.contains("New Vector(1.5R, -2R)"));
    assert!(vb.contains("New Point3D(0R, 1R, 2R)"));
    assert!(vb.contains("CType(Nothing, Double)"));
}

#[test]
fn test_blur_effect_scenario() {
    let cs = render(&blur(), false, OutputLanguage::CSharp);
    assert!(cs.contains("public class BlurEffect : ShaderEffect"));
    assert!(cs.contains("\"/Effects.Generated;component/BlurEffect.ps\""));
    assert!(cs.contains("DependencyProperty.Register(\"Radius\", typeof(float), typeof(BlurEffect), new UIPropertyMetadata(((float)(5F)), PixelShaderConstantCallback(1)))"));
    assert_eq!(update_calls(&cs), ["InputProperty", "RadiusProperty"]);

    let vb = render(&blur(), false, OutputLanguage::VisualBasic);
    assert!(vb.contains("Public Class BlurEffect\n        Inherits ShaderEffect\n"));
    assert!(vb.contains("\"/Effects.Generated;component/BlurEffect.ps\""));
    assert!(vb.contains("New UIPropertyMetadata(CType(5!, Single), PixelShaderConstantCallback(1))"));
    assert_eq!(update_calls(&vb), ["InputProperty", "RadiusProperty"]);
}

#[test]
fn test_external_constructor_skips_resource_loading() {
    let cs = render(&blur(), true, OutputLanguage::CSharp);
    assert!(cs.contains("public BlurEffect(PixelShader shader)"));
    assert!(cs.contains("this.PixelShader = shader;"));
    assert!(!cs.contains("UriSource"));
}

#[test]
fn test_generation_is_deterministic() {
    for language in LANGUAGES {
        assert_eq!(render(&mixed(), false, language), render(&mixed(), false, language));
    }
}

#[test]
fn test_descriptions_become_doc_comments() {
    let model = blur().with_description("Gaussian\n  blur.");
    let cs = render(&model, false, OutputLanguage::CSharp);
    assert!(cs.contains("    /// <summary>Gaussian blur.</summary>\n    public class BlurEffect"));
    assert!(cs.contains("// <auto-generated>"));
    assert!(!cs.contains("/// <auto-generated>"));

    let vb = render(&model, false, OutputLanguage::VisualBasic);
    assert!(vb.contains("    '''<summary>Gaussian blur.</summary>\n    Public Class BlurEffect"));
}

#[test]
fn test_description_markup_is_escaped_and_left_intact() {
    let text = "Radius <px> & public static DependencyProperty Public Shared";
    let escaped = "Radius &lt;px&gt; &amp; public static DependencyProperty Public Shared";
    let model = blur().with_description(text);

    let cs = render(&model, false, OutputLanguage::CSharp);
    assert!(cs.contains(&format!("/// <summary>{escaped}</summary>")));
    assert_eq!(cs.matches("readonly").count(), 2);

    let vb = render(&model, false, OutputLanguage::VisualBasic);
    assert!(vb.contains(&format!("'''<summary>{escaped}</summary>")));
    assert_eq!(vb.matches("ReadOnly").count(), 2);
}

#[test]
fn test_reserved_class_name_fails() {
    let model = ShaderModel::new("Effects", "class");
    let err = generate(&model, false, OutputLanguage::CSharp, Indent::default()).unwrap_err();
    assert_eq!(err.to_string(), "Failed to generate C# class Effects.class");

    assert!(generate(&model, false, OutputLanguage::VisualBasic, Indent::default()).is_err());
}

#[test]
fn test_generator_from_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fxwrap.toml");
    std::fs::write(&path, "language = \"vb\"\nindent_spaces = 2\n").unwrap();

    let generator = Generator::new(Settings::from_file(&path).unwrap());
    let code = generator.generate(&blur()).unwrap();

    assert_eq!(generator.file_name(&blur()), "BlurEffect.vb");
    assert!(code.contains("\n  Public Class BlurEffect\n    Inherits ShaderEffect\n"));
}

#[test]
fn test_model_from_json() {
    let json = r#"{
        "generated_namespace": "Effects.Generated",
        "generated_class_name": "BlurEffect",
        "registers": [
            {
                "name": "Radius",
                "register_type": "float",
                "register": 1,
                "default_value": { "float": 5.0 }
            }
        ]
    }"#;
    let model: ShaderModel = serde_json::from_str(json).unwrap();

    assert!(model.validate().is_ok());
    assert_eq!(
        render(&model, false, OutputLanguage::CSharp),
        render(&blur(), false, OutputLanguage::CSharp)
    );
}
