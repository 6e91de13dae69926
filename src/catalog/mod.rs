// SPDX-License-Identifier: MPL-2.0
//! Self-describing component catalog.
//!
//! Static metadata describing every component the library ships or plans to
//! ship: its category, status, configurable properties, and a usage snippet.
//! Documentation hosts render their component index directly from this table.

use serde::Serialize;

/// Thematic grouping used by documentation hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Buttons,
    Inputs,
    Forms,
    Cards,
    Navigation,
    Tables,
    Feedback,
    Overlays,
    Typography,
    Utilities,
}

/// Implementation status of a cataloged component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// Implemented and exported.
    Ready,
    /// On the roadmap, not yet implemented.
    Planned,
}

/// Interactive demo available for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Demo {
    Button,
    Input,
    Checkbox,
    Card,
    Navbar,
    Toast,
    Spinner,
}

/// A configurable property of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropDoc {
    pub name: &'static str,
    pub ty: &'static str,
    pub description: &'static str,
}

/// Documentation record for one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentDoc {
    pub name: &'static str,
    pub slug: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<Demo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<&'static str>,
    pub props: &'static [PropDoc],
}

/// Returns every cataloged component, ready and planned.
#[must_use]
pub fn all() -> &'static [ComponentDoc] {
    COMPONENT_DOCS
}

/// Looks up a component by its slug.
#[must_use]
pub fn find(slug: &str) -> Option<&'static ComponentDoc> {
    COMPONENT_DOCS.iter().find(|doc| doc.slug == slug)
}

/// Returns the components in the given category.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static ComponentDoc> {
    COMPONENT_DOCS
        .iter()
        .filter(move |doc| doc.category == category)
}

/// Returns the implemented components.
pub fn ready() -> impl Iterator<Item = &'static ComponentDoc> {
    COMPONENT_DOCS
        .iter()
        .filter(|doc| doc.status == Status::Ready)
}

static COMPONENT_DOCS: &[ComponentDoc] = &[
    ComponentDoc {
        name: "Button",
        slug: "button",
        category: Category::Buttons,
        description: "Tokenized button primitive that supports solid, outline, soft, ghost, \
                      and link variants along with sm/md/lg sizing.",
        status: Status::Ready,
        demo: Some(Demo::Button),
        usage: Some(
            r#"Button::new("Save")
    .variant(ButtonVariant::Solid)
    .size(ControlSize::Md)
    .on_press(Message::Save)
    .view()"#,
        ),
        props: &[
            PropDoc {
                name: "variant",
                ty: "ButtonVariant",
                description: "Selects the button treatment pulled from the design tokens.",
            },
            PropDoc {
                name: "size",
                ty: "ControlSize",
                description: "Toggles padding + typography scale.",
            },
            PropDoc {
                name: "full_width",
                ty: "bool",
                description: "Expands to fill available horizontal space.",
            },
            PropDoc {
                name: "on_press",
                ty: "Message",
                description: "Press message; omitted means the button renders disabled.",
            },
        ],
    },
    ComponentDoc {
        name: "Input",
        slug: "input",
        category: Category::Inputs,
        description: "Single-line text input with sm/md/lg sizing, a focus ring, and an \
                      invalid state wired to the danger color.",
        status: Status::Ready,
        demo: Some(Demo::Input),
        usage: Some(
            r#"Input::new("Email", &state.email)
    .size(ControlSize::Md)
    .invalid(!state.email_valid)
    .on_input(Message::EmailChanged)
    .view()"#,
        ),
        props: &[
            PropDoc {
                name: "size",
                ty: "ControlSize",
                description: "Toggles padding + typography scale.",
            },
            PropDoc {
                name: "invalid",
                ty: "bool",
                description: "Swaps the border and focus ring to the danger color.",
            },
            PropDoc {
                name: "on_input",
                ty: "Fn(String) -> Message",
                description: "Edit handler; omitted means the input renders disabled.",
            },
            PropDoc {
                name: "on_submit",
                ty: "Message",
                description: "Message produced when Enter is pressed.",
            },
        ],
    },
    ComponentDoc {
        name: "Checkbox",
        slug: "checkbox",
        category: Category::Inputs,
        description: "Labeled checkbox with an optional secondary description line.",
        status: Status::Ready,
        demo: Some(Demo::Checkbox),
        usage: Some(
            r#"Checkbox::new("Subscribe", state.subscribed)
    .description("Monthly digest, no spam.")
    .on_toggle(Message::SubscriptionToggled)
    .view()"#,
        ),
        props: &[
            PropDoc {
                name: "description",
                ty: "String",
                description: "Secondary hint rendered under the label.",
            },
            PropDoc {
                name: "on_toggle",
                ty: "Fn(bool) -> Message",
                description: "Toggle handler; omitted means the checkbox renders disabled.",
            },
        ],
    },
    ComponentDoc {
        name: "Card",
        slug: "card",
        category: Category::Cards,
        description: "Bordered surface with optional header and footer rows, capped at a \
                      readable max width.",
        status: Status::Ready,
        demo: Some(Demo::Card),
        usage: Some(
            r#"Card::new(body)
    .header("Account")
    .footer(footer_row)
    .view()"#,
        ),
        props: &[
            PropDoc {
                name: "header",
                ty: "String",
                description: "Title row separated from the body by a rule.",
            },
            PropDoc {
                name: "footer",
                ty: "Element",
                description: "Footer row for actions or metadata.",
            },
            PropDoc {
                name: "max_width",
                ty: "f32",
                description: "Overrides the default maximum card width.",
            },
        ],
    },
    ComponentDoc {
        name: "Divider",
        slug: "divider",
        category: Category::Utilities,
        description: "Thin horizontal separator using the border width token.",
        status: Status::Ready,
        demo: None,
        usage: Some("divider()"),
        props: &[],
    },
    ComponentDoc {
        name: "Navbar",
        slug: "navbar",
        category: Category::Navigation,
        description: "Responsive navigation bar with configurable nav links, up to two \
                      call-to-action buttons, and a collapsible menu.",
        status: Status::Ready,
        demo: Some(Demo::Navbar),
        usage: Some(
            r#"navbar::view(navbar::ViewContext {
    brand: "Ansiversa",
    links: &state.links,
    primary_action: Some(&login),
    secondary_action: Some(&register),
    menu_open: state.menu_open,
})"#,
        ),
        props: &[
            PropDoc {
                name: "links",
                ty: "&[NavLink]",
                description: "Navigation collection rendered across the bar.",
            },
            PropDoc {
                name: "primary_action",
                ty: "Option<&NavAction>",
                description: "Configurable CTA shown beside the links.",
            },
            PropDoc {
                name: "secondary_action",
                ty: "Option<&NavAction>",
                description: "Optional secondary CTA.",
            },
            PropDoc {
                name: "menu_open",
                ty: "bool",
                description: "Whether the collapsed link menu is expanded.",
            },
        ],
    },
    ComponentDoc {
        name: "Toast",
        slug: "toast",
        category: Category::Feedback,
        description: "Transient, auto-dismissing notification card driven by the feedback \
                      store, with a kind-colored accent.",
        status: Status::Ready,
        demo: Some(Demo::Toast),
        usage: Some(
            r#"store.notify(ToastKind::Success, "Saved");
// in view():
feedback::toast::view_overlay(&store)"#,
        ),
        props: &[
            PropDoc {
                name: "kind",
                ty: "ToastKind",
                description: "Success or Error; selects the accent color.",
            },
            PropDoc {
                name: "message",
                ty: "String",
                description: "Text shown in the toast card.",
            },
        ],
    },
    ComponentDoc {
        name: "LoadingSpinner",
        slug: "loading-spinner",
        category: Category::Utilities,
        description: "Canvas-based rotating spinner, typically shown while a feedback store \
                      reports loading.",
        status: Status::Ready,
        demo: Some(Demo::Spinner),
        usage: Some(
            r#"LoadingSpinner::new(palette::PRIMARY_500, state.rotation)
    .into_element()"#,
        ),
        props: &[
            PropDoc {
                name: "rotation",
                ty: "f32",
                description: "Rotation angle in radians, advanced by the host's animation tick.",
            },
            PropDoc {
                name: "size",
                ty: "f32",
                description: "Spinner diameter; defaults to the medium sizing token.",
            },
        ],
    },
    // Roadmap
    ComponentDoc {
        name: "Textarea",
        slug: "textarea",
        category: Category::Inputs,
        description: "Multi-line text input sharing the input sizing and validity treatment.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Select",
        slug: "select",
        category: Category::Inputs,
        description: "Dropdown selection input with placeholder support.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Radio",
        slug: "radio",
        category: Category::Inputs,
        description: "Exclusive-choice input rendered as a radio group.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Toggle",
        slug: "toggle",
        category: Category::Inputs,
        description: "On/off switch alternative to the checkbox.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "FormGroup",
        slug: "form-group",
        category: Category::Forms,
        description: "Label, control, hint, and field error arranged on the spacing grid.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Tabs",
        slug: "tabs",
        category: Category::Navigation,
        description: "Horizontal tab strip for switching between peer views.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Breadcrumbs",
        slug: "breadcrumbs",
        category: Category::Navigation,
        description: "Hierarchical location trail with link separators.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Table",
        slug: "table",
        category: Category::Tables,
        description: "Data table with header, row, and cell building blocks.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Badge",
        slug: "badge",
        category: Category::Feedback,
        description: "Small status pill using the semantic color tokens.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Alert",
        slug: "alert",
        category: Category::Feedback,
        description: "Inline, persistent callout for warnings and errors.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Modal",
        slug: "modal",
        category: Category::Overlays,
        description: "Blocking dialog surface rendered above the page.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Tooltip",
        slug: "tooltip",
        category: Category::Overlays,
        description: "Hover hint anchored to its trigger element.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Heading",
        slug: "heading",
        category: Category::Typography,
        description: "Semantic heading mapped onto the typography scale.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Skeleton",
        slug: "skeleton",
        category: Category::Utilities,
        description: "Placeholder block shown while content loads.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "IconButton",
        slug: "icon-button",
        category: Category::Buttons,
        description: "Square button holding a single icon, sharing the button variants.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "ButtonGroup",
        slug: "button-group",
        category: Category::Buttons,
        description: "Row of attached buttons acting as one segmented control.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Drawer",
        slug: "drawer",
        category: Category::Overlays,
        description: "Panel sliding in from a screen edge over the page content.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Sidebar",
        slug: "sidebar",
        category: Category::Navigation,
        description: "Vertical navigation column with sections and links.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Popover",
        slug: "popover",
        category: Category::Overlays,
        description: "Click-triggered floating panel anchored to its trigger.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Tag",
        slug: "tag",
        category: Category::Feedback,
        description: "Compact removable label for filters and selections.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
    ComponentDoc {
        name: "Code",
        slug: "code",
        category: Category::Typography,
        description: "Inline and block code text with a monospace treatment.",
        status: Status::Planned,
        demo: None,
        usage: None,
        props: &[],
    },
];
