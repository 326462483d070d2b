// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Sin lógica de negocio ni reintentos: cada método hace una petición y
// traduce el fallo a ApiError. El token de sesión viaja como Bearer
// cuando el llamante lo tiene.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::config::CONFIG;
use crate::error::{classify_status, ApiError};
use crate::models::{
    AdminUserPatch, ListingQuery, PaginationView, Product, ProductDraft, ProfileUpdate,
    SearchInfo, User,
};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Autenticación
    // ------------------------------------------------------------------

    /// Iniciar sesión con usuario (o email) y contraseña
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Iniciando sesión para: {}", username);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, false).await);
        }
        let body = response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))?;
        log::info!("✅ Sesión iniciada: {}", body.user.username);
        Ok(body)
    }

    /// Registrar una cuenta nueva. El backend NO devuelve token aquí.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        let url = format!("{}/auth/register", self.base_url);
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("📝 Registrando cuenta: {}", username);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, false).await);
        }
        response
            .json::<RegisterResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    /// Cerrar sesión en el backend. El estado local se limpia aparte.
    pub async fn logout(&self, token: &str) -> Result<MessageResponse, ApiError> {
        let url = format!("{}/auth/logout", self.base_url);

        log::info!("👋 Cerrando sesión en backend");

        let response = with_bearer(Request::post(&url), Some(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, true).await);
        }
        response
            .json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    /// Perfil del usuario autenticado (el backend devuelve el User pelado)
    pub async fn get_profile(&self, token: &str) -> Result<User, ApiError> {
        let url = format!("{}/auth/profile", self.base_url);
        let response = with_bearer(Request::get(&url), Some(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, true).await);
        }
        response
            .json::<User>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    /// Actualizar email y/o contraseña del perfil
    pub async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<ProfileUpdateResponse, ApiError> {
        let url = format!("{}/auth/profile", self.base_url);

        log::info!("👤 Actualizando perfil");

        let response = with_bearer(Request::put(&url), Some(token))
            .json(update)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, true).await);
        }
        response
            .json::<ProfileUpdateResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    // ------------------------------------------------------------------
    // Catálogo de productos
    // ------------------------------------------------------------------

    /// Listado paginado del catálogo
    pub async fn list_products(
        &self,
        token: Option<&str>,
        query: &ListingQuery,
    ) -> Result<ProductListResponse, ApiError> {
        let url = format!("{}/products", self.base_url);
        let response = with_bearer(Request::get(&url), token)
            .query(query.to_pairs().iter().map(|(k, v)| (k.as_str(), v)))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, token.is_some()).await);
        }
        let body = response
            .json::<ProductListResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))?;
        log::info!(
            "📋 Página {} de {}: {} productos",
            body.pagination.page,
            body.pagination.pages,
            body.products.len()
        );
        Ok(body)
    }

    /// Búsqueda con texto libre. Exige `q` no vacío; para listar sin
    /// texto está `list_products`.
    pub async fn search_products(
        &self,
        token: Option<&str>,
        query: &ListingQuery,
    ) -> Result<SearchResponse, ApiError> {
        let url = format!("{}/products/search", self.base_url);
        let response = with_bearer(Request::get(&url), token)
            .query(query.to_pairs().iter().map(|(k, v)| (k.as_str(), v)))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, token.is_some()).await);
        }
        let body = response
            .json::<SearchResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))?;
        log::info!(
            "🔍 Búsqueda '{}': {} de {} productos",
            body.search_info.query,
            body.search_info.total_found,
            body.search_info.total_products
        );
        Ok(body)
    }

    /// Detalle de producto (el backend devuelve el Product pelado)
    pub async fn get_product(&self, token: Option<&str>, id: i64) -> Result<Product, ApiError> {
        let url = format!("{}/products/{}", self.base_url, id);
        let response = with_bearer(Request::get(&url), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, token.is_some()).await);
        }
        response
            .json::<Product>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    /// Categorías distintas en uso, ya ordenadas por el backend
    pub async fn list_categories(&self, token: Option<&str>) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/products/categories", self.base_url);
        let response = with_bearer(Request::get(&url), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, token.is_some()).await);
        }
        let body = response
            .json::<CategoriesResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))?;
        Ok(body.categories)
    }

    /// Sugerencias para el autocompletado del buscador
    pub async fn get_suggestions(
        &self,
        token: Option<&str>,
        q: &str,
    ) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/products/search/suggestions", self.base_url);
        let response = with_bearer(Request::get(&url), token)
            .query([("q", q)])
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, token.is_some()).await);
        }
        let body = response
            .json::<SuggestionsResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))?;
        Ok(body.suggestions)
    }

    /// Crear producto
    pub async fn create_product(
        &self,
        token: &str,
        draft: &ProductDraft,
    ) -> Result<ProductMutationResponse, ApiError> {
        let url = format!("{}/products", self.base_url);

        log::info!("➕ Creando producto: {}", draft.name);

        let response = with_bearer(Request::post(&url), Some(token))
            .json(draft)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, true).await);
        }
        let body = response
            .json::<ProductMutationResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))?;
        log::info!("✅ Producto creado con id {}", body.product.id);
        Ok(body)
    }

    /// Actualizar producto (dueño o admin)
    pub async fn update_product(
        &self,
        token: &str,
        id: i64,
        draft: &ProductDraft,
    ) -> Result<ProductMutationResponse, ApiError> {
        let url = format!("{}/products/{}", self.base_url, id);

        log::info!("✏️ Actualizando producto {}", id);

        let response = with_bearer(Request::put(&url), Some(token))
            .json(draft)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, true).await);
        }
        response
            .json::<ProductMutationResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    /// Borrar producto (borrado lógico en el backend)
    pub async fn delete_product(&self, token: &str, id: i64) -> Result<MessageResponse, ApiError> {
        let url = format!("{}/products/{}", self.base_url, id);

        log::info!("🗑️ Eliminando producto {}", id);

        let response = with_bearer(Request::delete(&url), Some(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, true).await);
        }
        response
            .json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    /// Productos publicados por el usuario autenticado
    pub async fn list_my_products(
        &self,
        token: &str,
        query: &ListingQuery,
    ) -> Result<ProductListResponse, ApiError> {
        let url = format!("{}/my/products", self.base_url);
        let response = with_bearer(Request::get(&url), Some(token))
            .query(query.to_pairs().iter().map(|(k, v)| (k.as_str(), v)))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, true).await);
        }
        response
            .json::<ProductListResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    // ------------------------------------------------------------------
    // Administración
    // ------------------------------------------------------------------

    /// Todos los usuarios (solo admin; el backend devuelve el array pelado)
    pub async fn admin_list_users(&self, token: &str) -> Result<Vec<User>, ApiError> {
        let url = format!("{}/admin/users", self.base_url);

        log::info!("👑 Listando usuarios (admin)");

        let response = with_bearer(Request::get(&url), Some(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, true).await);
        }
        response
            .json::<Vec<User>>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    /// Cambiar rol y/o activación de un usuario (solo admin)
    pub async fn admin_update_user(
        &self,
        token: &str,
        id: i64,
        patch: &AdminUserPatch,
    ) -> Result<UserMutationResponse, ApiError> {
        let url = format!("{}/admin/users/{}", self.base_url, id);

        log::info!("👑 Actualizando usuario {} (admin)", id);

        let response = with_bearer(Request::put(&url), Some(token))
            .json(patch)
            .map_err(|e| ApiError::Network(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, true).await);
        }
        response
            .json::<UserMutationResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }

    /// Catálogo completo incluyendo productos desactivados (solo admin)
    pub async fn admin_list_products(
        &self,
        token: &str,
        query: &ListingQuery,
    ) -> Result<ProductListResponse, ApiError> {
        let url = format!("{}/admin/products", self.base_url);
        let response = with_bearer(Request::get(&url), Some(token))
            .query(query.to_pairs().iter().map(|(k, v)| (k.as_str(), v)))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(error_from_response(response, true).await);
        }
        response
            .json::<ProductListResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Parse error: {}", e)))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Lee el cuerpo de error `{"message": ...}` (si lo hay) y clasifica
async fn error_from_response(response: Response, had_token: bool) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.message);
    classify_status(status, had_token, message)
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(serde::Serialize)]
struct LoginRequest {
    username: String,
    password: String,
}

#[derive(serde::Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(serde::Serialize)]
struct RegisterRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(serde::Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

#[derive(serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(serde::Deserialize)]
pub struct ProfileUpdateResponse {
    pub message: String,
    pub user: User,
}

#[derive(serde::Deserialize)]
pub struct ProductMutationResponse {
    pub message: String,
    pub product: Product,
}

#[derive(serde::Deserialize)]
pub struct UserMutationResponse {
    pub message: String,
    pub user: User,
}

#[derive(serde::Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub pagination: PaginationView,
}

#[derive(serde::Deserialize)]
pub struct SearchResponse {
    pub products: Vec<Product>,
    pub pagination: PaginationView,
    pub search_info: SearchInfo,
}

#[derive(serde::Deserialize)]
struct CategoriesResponse {
    categories: Vec<String>,
}

#[derive(serde::Deserialize)]
struct SuggestionsResponse {
    suggestions: Vec<String>,
}
