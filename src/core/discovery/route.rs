use std::path::{Component, Path};

/// App-router route derivation: `page.{tsx,jsx}` maps its containing
/// directory, relative to `<root>/src/app` or `<root>/app`, to a route.
/// Anything else yields `None` — this is the only routing convention with a
/// concrete implementation; other `framework` values degrade to no route.
pub fn derive_app_router_route(root: &Path, file_path: &Path) -> Option<String> {
    let file_name = file_path.file_name()?.to_str()?;
    if file_name != "page.tsx" && file_name != "page.jsx" {
        return None;
    }

    let dir = file_path.parent()?;

    for base in ["src/app", "app"] {
        let base_dir = root.join(base);
        if let Ok(relative) = dir.strip_prefix(&base_dir) {
            let segments: Vec<String> = relative
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect();
            return Some(format!("/{}", segments.join("/")));
        }
    }

    None
}
