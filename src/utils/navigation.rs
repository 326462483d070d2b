// ============================================================================
// NAVIGATION - Rutas de la SPA sin recarga de página
// ============================================================================
// El enrutado se apoya en la History API: `navigate` hace pushState y emite
// un evento propio para que la app re-renderice. El botón atrás llega por
// `popstate` del navegador.
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::window;

/// Evento propio disparado tras cada pushState
pub const ROUTECHANGE_EVENT: &str = "routechange";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Products,
    ProductDetail(i64),
    ProductNew,
    ProductEdit(i64),
    Login,
    Register,
    Profile,
    MyProducts,
    Admin,
    NotFound,
}

/// Resuelve un pathname a una ruta. Puro para poder testearlo sin navegador.
pub fn parse_path(path: &str) -> Route {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => Route::Products,
        ["products"] => Route::Products,
        ["products", "new"] => Route::ProductNew,
        ["products", id] => match id.parse::<i64>() {
            Ok(id) => Route::ProductDetail(id),
            Err(_) => Route::NotFound,
        },
        ["products", id, "edit"] => match id.parse::<i64>() {
            Ok(id) => Route::ProductEdit(id),
            Err(_) => Route::NotFound,
        },
        ["login"] => Route::Login,
        ["register"] => Route::Register,
        ["profile"] => Route::Profile,
        ["my-products"] => Route::MyProducts,
        ["admin"] => Route::Admin,
        _ => Route::NotFound,
    }
}

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Query string actual, con el `?` inicial si existe
pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Cambia la URL sin recargar y notifica a los oyentes de ruta
pub fn navigate(path: &str) {
    let Some(window) = window() else {
        return;
    };
    let pushed = window
        .history()
        .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
    if pushed.is_err() {
        log::warn!("⚠️ No se pudo hacer pushState a {}", path);
        return;
    }
    if let Ok(event) = web_sys::Event::new(ROUTECHANGE_EVENT) {
        let _ = window.dispatch_event(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_products_share_the_catalog() {
        assert_eq!(parse_path("/"), Route::Products);
        assert_eq!(parse_path("/products"), Route::Products);
        assert_eq!(parse_path("/products/"), Route::Products);
    }

    #[test]
    fn product_routes_carry_their_id() {
        assert_eq!(parse_path("/products/42"), Route::ProductDetail(42));
        assert_eq!(parse_path("/products/42/edit"), Route::ProductEdit(42));
        assert_eq!(parse_path("/products/new"), Route::ProductNew);
    }

    #[test]
    fn bad_ids_fall_through_to_not_found() {
        assert_eq!(parse_path("/products/abc"), Route::NotFound);
        assert_eq!(parse_path("/products/12x/edit"), Route::NotFound);
    }

    #[test]
    fn static_routes_resolve() {
        assert_eq!(parse_path("/login"), Route::Login);
        assert_eq!(parse_path("/register"), Route::Register);
        assert_eq!(parse_path("/profile"), Route::Profile);
        assert_eq!(parse_path("/my-products"), Route::MyProducts);
        assert_eq!(parse_path("/admin"), Route::Admin);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(parse_path("/checkout"), Route::NotFound);
        assert_eq!(parse_path("/products/1/edit/extra"), Route::NotFound);
    }
}
