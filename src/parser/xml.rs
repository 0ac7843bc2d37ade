//! WordprocessingML node helpers.

use roxmltree::Node;

pub(crate) const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub(crate) const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// True if the node is the WML element `name`.
pub(crate) fn is_wml(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(WML_NS)
}

/// First WML child element called `name`.
pub(crate) fn wml<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_wml(n, name))
}

/// All WML child elements called `name`.
pub(crate) fn wml_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| is_wml(n, name))
}

/// `w:val` of the WML child element `child`.
pub(crate) fn wml_attr<'a, 'input>(node: Node<'a, 'input>, child: &str) -> Option<&'a str> {
    wml(node, child).and_then(|n| n.attribute((WML_NS, "val")))
}

/// Read a WML on/off toggle such as `w:b`.
///
/// Present with no value, or any value other than `0`/`false`/`off`,
/// means on. Absent means unset.
pub(crate) fn wml_bool(parent: Node, name: &str) -> Option<bool> {
    wml(parent, name).map(|n| {
        n.attribute((WML_NS, "val"))
            .map_or(true, |v| !matches!(v, "0" | "false" | "off"))
    })
}
