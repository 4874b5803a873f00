//! Tests wiring module configuration into the image formatter settings.

use media_extra::formatter::image::{
    ImageStyle, ResponsiveImageFormatter, ResponsiveImageOptions, ResponsiveImageStyle,
    responsive_style_options, static_style_options,
};
use media_extra::{LinkPicker, ModuleSettings};

fn site_settings() -> ModuleSettings {
    let mut settings = ModuleSettings::default();
    settings
        .allowed_image_styles_for_static_image
        .insert("thumbnail".to_string(), true);
    settings
        .allowed_image_styles_for_static_image
        .insert("wide_image".to_string(), false);
    settings
        .allowed_image_styles_for_responsive_image
        .insert("hero".to_string(), true);
    settings.linkit_profile = Some("default".to_string());
    settings
}

#[test]
fn test_static_styles_gated_by_site_allow_list() {
    let available = vec![
        ImageStyle {
            id: "thumbnail".to_string(),
            label: "Thumbnail".to_string(),
        },
        ImageStyle {
            id: "wide_image".to_string(),
            label: "Wide image".to_string(),
        },
        ImageStyle {
            id: "unlisted".to_string(),
            label: "Unlisted".to_string(),
        },
    ];
    let settings = site_settings();
    let options =
        static_style_options(&available, &settings.allowed_image_styles_for_static_image);
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].label, "Thumbnail");
}

#[test]
fn test_responsive_styles_need_allow_list_and_mappings() {
    let available = vec![
        ResponsiveImageStyle {
            id: "hero".to_string(),
            label: "Hero".to_string(),
            has_mappings: true,
        },
        ResponsiveImageStyle {
            id: "hero_empty".to_string(),
            label: "Hero (unmapped)".to_string(),
            has_mappings: false,
        },
    ];
    let settings = site_settings();
    let options = responsive_style_options(
        &available,
        &settings.allowed_image_styles_for_responsive_image,
    );
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].id, "hero");
}

#[test]
fn test_picker_profile_flows_from_module_settings() {
    let settings = site_settings();
    // The capability is modelled as an Option: a site without a picker
    // simply never constructs one, and the link setting stays inert.
    let picker = settings
        .linkit_profile
        .as_ref()
        .map(|profile| LinkPicker {
            profile: profile.clone(),
        });

    let formatter = ResponsiveImageFormatter::new(ResponsiveImageOptions {
        responsive_image_style: Some("hero".to_string()),
        link: Some("/campaign".to_string()),
    });
    assert_eq!(
        formatter.thumbnail_url(picker.as_ref()).as_deref(),
        Some("/campaign")
    );
    assert_eq!(formatter.thumbnail_url(None), None);
}
