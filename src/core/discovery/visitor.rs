//! The element-discovery AST walker.
//!
//! Mirrors the teacher's combined-visitor idiom (one `Visit` impl tracking
//! ancestor state as it descends) but the state here is scope-oriented
//! rather than JSX-context-oriented: each function/class boundary pushes a
//! fresh `ScopeFrame` so `conditional`/`dynamic` reset at the enclosing
//! function, as required.

use std::collections::{BTreeMap, HashMap};

use swc_common::SourceMap;
use swc_ecma_ast::{
    BinaryOp, Callee, ClassDecl, CondExpr, DefaultDecl, Expr, FnDecl, JSXAttrName, JSXAttrOrSpread,
    JSXAttrValue, JSXElement, JSXElementName, JSXExpr, JSXFragment, JSXOpeningElement, Lit, MemberProp,
    Pat, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::model::{ElementType, RawElement};

const EVENT_HANDLER_PROPS: &[&str] = &[
    "onClick", "onSubmit", "onChange", "onInput", "onFocus", "onBlur", "onKeyDown", "onKeyUp", "onKeyPress",
];

fn is_pascal_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Resolve a JSX tag name to its emitted type, or `None` if it is not
/// interactive (or doesn't carry the event-handler prop a generic tag
/// requires).
fn resolve_interactive_type(
    tag_name: &str,
    attr_names: &[String],
    component_map: &HashMap<String, String>,
) -> Option<ElementType> {
    if let Some(native) = ElementType::from_tag_name(tag_name) {
        if native.is_always_interactive() {
            return Some(native);
        }
        if native.is_generic() && attr_names.iter().any(|a| EVENT_HANDLER_PROPS.contains(&a.as_str())) {
            return Some(native);
        }
        return None;
    }

    component_map
        .get(tag_name)
        .and_then(|mapped| ElementType::from_tag_name(mapped))
}

/// Among the event-handler props actually present, pick the one whose
/// value supplies the element's `handler`: `onClick`, then `onSubmit`, then
/// the lexically-first of the rest.
fn pick_handler_prop(present: &[String]) -> Option<String> {
    if present.iter().any(|p| p == "onClick") {
        return Some("onClick".to_string());
    }
    if present.iter().any(|p| p == "onSubmit") {
        return Some("onSubmit".to_string());
    }
    let mut rest: Vec<&String> = present.iter().filter(|p| p.as_str() != "onClick" && p.as_str() != "onSubmit").collect();
    rest.sort();
    rest.into_iter().next().cloned()
}

fn attr_name_string(name: &JSXAttrName) -> String {
    match name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}-{}", ns.ns.sym, ns.name.sym),
    }
}

fn attr_string_value(value: &JSXAttrValue) -> Option<String> {
    match value {
        JSXAttrValue::Lit(Lit::Str(s)) => Some(s.value.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, Default)]
struct ScopeFrame {
    component_name: Option<String>,
    conditional_depth: u32,
    dynamic_depth: u32,
}

pub struct DiscoveryVisitor<'a> {
    file_path: String,
    source_map: &'a SourceMap,
    component_map: &'a HashMap<String, String>,
    route: Option<String>,
    scope_stack: Vec<ScopeFrame>,
    pub elements: Vec<RawElement>,
}

impl<'a> DiscoveryVisitor<'a> {
    pub fn new(
        file_path: String,
        source_map: &'a SourceMap,
        component_map: &'a HashMap<String, String>,
        route: Option<String>,
    ) -> Self {
        Self {
            file_path,
            source_map,
            component_map,
            route,
            scope_stack: vec![ScopeFrame::default()],
            elements: Vec::new(),
        }
    }

    fn current_component_name(&self) -> Option<String> {
        self.scope_stack.iter().rev().find_map(|f| f.component_name.clone())
    }

    fn in_conditional(&self) -> bool {
        self.scope_stack.last().is_some_and(|f| f.conditional_depth > 0)
    }

    fn in_dynamic(&self) -> bool {
        self.scope_stack.last().is_some_and(|f| f.dynamic_depth > 0)
    }

    fn with_scope<F: FnOnce(&mut Self)>(&mut self, component_name: Option<String>, f: F) {
        self.scope_stack.push(ScopeFrame {
            component_name,
            conditional_depth: 0,
            dynamic_depth: 0,
        });
        f(self);
        self.scope_stack.pop();
    }

    fn with_conditional<F: FnOnce(&mut Self)>(&mut self, f: F) {
        if let Some(frame) = self.scope_stack.last_mut() {
            frame.conditional_depth += 1;
        }
        f(self);
        if let Some(frame) = self.scope_stack.last_mut() {
            frame.conditional_depth -= 1;
        }
    }

    fn with_dynamic<F: FnOnce(&mut Self)>(&mut self, f: F) {
        if let Some(frame) = self.scope_stack.last_mut() {
            frame.dynamic_depth += 1;
        }
        f(self);
        if let Some(frame) = self.scope_stack.last_mut() {
            frame.dynamic_depth -= 1;
        }
    }

    fn emit_element(&mut self, opening: &JSXOpeningElement, children_text: Option<String>) {
        let tag_name = match &opening.name {
            JSXElementName::Ident(ident) => ident.sym.to_string(),
            _ => return,
        };

        let mut attr_names = Vec::new();
        let mut attributes = BTreeMap::new();
        let mut aria_label = None;
        let mut placeholder = None;
        let mut present_event_props = Vec::new();
        let mut event_values: HashMap<String, Option<String>> = HashMap::new();

        for attr in &opening.attrs {
            let JSXAttrOrSpread::JSXAttr(attr) = attr else { continue };
            let name = attr_name_string(&attr.name);
            attr_names.push(name.clone());

            if let Some(suffix) = name.strip_prefix("data-") {
                if let Some(value) = attr.value.as_ref().and_then(attr_string_value) {
                    attributes.insert(format!("data-{suffix}"), value);
                }
            }

            if name == "aria-label" {
                aria_label = attr.value.as_ref().and_then(attr_string_value);
            }
            if name == "placeholder" {
                placeholder = attr.value.as_ref().and_then(attr_string_value);
            }

            if EVENT_HANDLER_PROPS.contains(&name.as_str()) {
                present_event_props.push(name.clone());
                let ident_value = match &attr.value {
                    Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
                        JSXExpr::Expr(expr) => match &**expr {
                            Expr::Ident(ident) => Some(ident.sym.to_string()),
                            _ => None,
                        },
                        JSXExpr::JSXEmptyExpr(_) => None,
                    },
                    _ => None,
                };
                event_values.insert(name, ident_value);
            }
        }

        let Some(element_type) = resolve_interactive_type(&tag_name, &attr_names, self.component_map) else {
            return;
        };

        let handler = pick_handler_prop(&present_event_props).and_then(|prop| event_values.remove(&prop).flatten());

        let label = children_text
            .filter(|t| !t.is_empty())
            .or(aria_label)
            .or(placeholder);

        let loc = self.source_map.lookup_char_pos(opening.span.lo);

        self.elements.push(RawElement {
            element_type,
            file_path: self.file_path.clone(),
            line: loc.line,
            column: loc.col_display + 1,
            component_name: self.current_component_name(),
            route: self.route.clone(),
            label,
            handler,
            attributes,
            conditional: self.in_conditional(),
            dynamic: self.in_dynamic(),
        });
    }
}

fn flatten_static_text(node: &JSXElement) -> Option<String> {
    let mut parts = Vec::new();
    for child in &node.children {
        if let swc_ecma_ast::JSXElementChild::JSXText(text) = child {
            let trimmed = text.value.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn is_dynamic_iteration_method(name: &str) -> bool {
    matches!(name, "map" | "flatMap" | "forEach")
}

impl<'a> Visit for DiscoveryVisitor<'a> {
    fn visit_jsx_element(&mut self, node: &JSXElement) {
        let children_text = flatten_static_text(node);
        self.emit_element(&node.opening, children_text);

        node.opening.visit_children_with(self);
        for child in &node.children {
            child.visit_with(self);
        }
        if let Some(closing) = &node.closing {
            closing.visit_with(self);
        }
    }

    fn visit_jsx_fragment(&mut self, node: &JSXFragment) {
        for child in &node.children {
            child.visit_with(self);
        }
    }

    fn visit_fn_decl(&mut self, node: &FnDecl) {
        let name = node.ident.sym.to_string();
        let component_name = is_pascal_case(&name).then_some(name);
        self.with_scope(component_name, |this| node.function.visit_children_with(this));
    }

    fn visit_class_decl(&mut self, node: &ClassDecl) {
        let name = node.ident.sym.to_string();
        let component_name = is_pascal_case(&name).then_some(name);
        self.with_scope(component_name, |this| node.class.visit_children_with(this));
    }

    fn visit_export_default_decl(&mut self, node: &swc_ecma_ast::ExportDefaultDecl) {
        if let DefaultDecl::Fn(fn_expr) = &node.decl {
            let component_name = fn_expr
                .ident
                .as_ref()
                .map(|i| i.sym.to_string())
                .filter(|name| is_pascal_case(name));
            self.with_scope(component_name, |this| fn_expr.function.visit_children_with(this));
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if let (Pat::Ident(ident), Some(init)) = (&node.name, &node.init) {
            if let Expr::Arrow(arrow) = &**init {
                let name = ident.id.sym.to_string();
                let component_name = is_pascal_case(&name).then_some(name);
                self.with_scope(component_name, |this| arrow.visit_children_with(this));
                return;
            }
        }
        node.visit_children_with(self);
    }

    fn visit_cond_expr(&mut self, node: &CondExpr) {
        node.test.visit_with(self);
        self.with_conditional(|this| {
            node.cons.visit_with(this);
            node.alt.visit_with(this);
        });
    }

    fn visit_bin_expr(&mut self, node: &swc_ecma_ast::BinExpr) {
        if matches!(node.op, BinaryOp::LogicalAnd | BinaryOp::LogicalOr) {
            node.left.visit_with(self);
            self.with_conditional(|this| node.right.visit_with(this));
        } else {
            node.visit_children_with(self);
        }
    }

    fn visit_call_expr(&mut self, node: &swc_ecma_ast::CallExpr) {
        let is_iteration = matches!(
            &node.callee,
            Callee::Expr(expr) if matches!(
                &**expr,
                Expr::Member(member) if matches!(
                    &member.prop,
                    MemberProp::Ident(ident) if is_dynamic_iteration_method(&ident.sym)
                )
            )
        );

        if is_iteration {
            self.with_dynamic(|this| node.visit_children_with(this));
        } else {
            node.visit_children_with(self);
        }
    }
}
