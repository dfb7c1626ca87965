use pretty_assertions::assert_eq;

use super::*;

#[test]
fn interface_modifiers_and_attribute_sections() {
    let module = fixture_module();
    let services = namespace(&module.members, "Sample.Services");

    let weather = interface(&services.members, "IWeatherService");
    assert_eq!(weather.modifiers, vec!["public"]);
    assert_eq!(weather.attribute_lists, vec!["ProxyInterface"]);
    assert!(weather.is_public());

    let clock = interface(&services.members, "IClock");
    assert_eq!(
        clock.attribute_lists,
        vec!["BlazorMobile.Common.Attributes.ProxyInterface"]
    );

    let hidden = interface(&services.members, "IHidden");
    assert_eq!(hidden.modifiers, vec!["internal"]);
    assert!(hidden.attribute_lists.is_empty());
    assert!(!hidden.is_public());
}

#[test]
fn attribute_section_keeps_every_attribute() {
    let module = parse("[Serializable, ProxyInterface]\n[Other]\npublic interface IFoo { }");
    let foo = interface(&module.members, "IFoo");

    assert_eq!(
        foo.attribute_lists,
        vec!["Serializable, ProxyInterface", "Other"]
    );
}

#[test]
fn non_method_members_are_kept_as_other() {
    let module = fixture_module();
    let services = namespace(&module.members, "Sample.Services");
    let weather = interface(&services.members, "IWeatherService");

    assert_eq!(weather.methods().count(), 4);
    let others = weather
        .members
        .iter()
        .filter(|member| matches!(member, InterfaceMember::Other { .. }))
        .count();
    assert_eq!(others, 2);
}

#[test]
fn empty_interface_has_no_members() {
    let module = fixture_module();
    let services = namespace(&module.members, "Sample.Services");
    let nested = namespace(&services.members, "Nested");

    let inner = interface(&nested.members, "IInner");
    assert!(inner.members.is_empty());
}

#[test]
fn interface_line_is_one_based() {
    let module = parse("\n\npublic interface IFoo { }");
    assert_eq!(interface(&module.members, "IFoo").line, 3);
}
