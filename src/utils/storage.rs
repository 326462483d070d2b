use web_sys::{window, Storage};

/// Clave bajo la que persiste el token de sesión entre recargas
pub const TOKEN_KEY: &str = "marketplace_token";

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_token(token: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(TOKEN_KEY, token)
        .map_err(|_| "Error guardando el token en localStorage".to_string())?;
    Ok(())
}

pub fn load_token() -> Option<String> {
    let storage = get_local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

pub fn remove_token() -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(TOKEN_KEY)
        .map_err(|_| "Error eliminando el token de localStorage".to_string())?;
    Ok(())
}
