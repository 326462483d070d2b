// ============================================================================
// LISTING QUERY - Estado de búsqueda/filtros/paginación <-> query string
// ============================================================================
// La URL es la fuente de verdad del listado: este módulo define el mapeo
// determinista en ambos sentidos. Solo viajan los campos con valor no vacío
// o distinto del default; `page` viaja siempre.
// ============================================================================

use url::form_urlencoded;

pub const DEFAULT_PER_PAGE: u32 = 12;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortBy {
    CreatedAt,
    Name,
    Price,
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy::CreatedAt
    }
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::CreatedAt => "created_at",
            SortBy::Name => "name",
            SortBy::Price => "price",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "created_at" => Some(SortBy::CreatedAt),
            "name" => Some(SortBy::Name),
            "price" => Some(SortBy::Price),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Desc
    }
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Filtros del panel lateral. Se aplican como conjunto completo:
/// lo que no venga aquí se descarta del estado anterior.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FilterSet {
    pub category: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

/// Estado completo de un listado de productos
#[derive(Clone, PartialEq, Debug)]
pub struct ListingQuery {
    pub q: String,
    pub category: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            q: String::new(),
            category: String::new(),
            min_price: None,
            max_price: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ListingQuery {
    /// Pares clave/valor para la petición al backend y para la URL.
    /// Solo campos no vacíos / no default; `page` siempre.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.q.is_empty() {
            pairs.push(("q".to_string(), self.q.clone()));
        }
        if !self.category.is_empty() {
            pairs.push(("category".to_string(), self.category.clone()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("min_price".to_string(), format_price_param(min)));
        }
        if let Some(max) = self.max_price {
            pairs.push(("max_price".to_string(), format_price_param(max)));
        }
        if self.sort_by != SortBy::default() {
            pairs.push(("sort_by".to_string(), self.sort_by.as_str().to_string()));
        }
        if self.sort_order != SortOrder::default() {
            pairs.push(("sort_order".to_string(), self.sort_order.as_str().to_string()));
        }
        pairs.push(("page".to_string(), self.page.to_string()));
        if self.per_page != DEFAULT_PER_PAGE {
            pairs.push(("per_page".to_string(), self.per_page.to_string()));
        }
        pairs
    }

    /// Query string URL-encoded (sin el `?` inicial)
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_pairs() {
            serializer.append_pair(&key, &value);
        }
        serializer.finish()
    }

    /// Reconstruye el estado desde pares clave/valor. Valores inválidos se
    /// ignoran igual que hace el backend; claves desconocidas se descartan.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = ListingQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => query.q = value,
                "category" => query.category = value,
                "min_price" => query.min_price = value.parse::<f64>().ok(),
                "max_price" => query.max_price = value.parse::<f64>().ok(),
                "sort_by" => {
                    if let Some(sort_by) = SortBy::from_key(&value) {
                        query.sort_by = sort_by;
                    }
                }
                "sort_order" => {
                    if let Some(sort_order) = SortOrder::from_key(&value) {
                        query.sort_order = sort_order;
                    }
                }
                "page" => query.page = value.parse::<u32>().map(|n| n.max(1)).unwrap_or(1),
                "per_page" => {
                    query.per_page = value
                        .parse::<u32>()
                        .map(|n| n.clamp(1, MAX_PER_PAGE))
                        .unwrap_or(DEFAULT_PER_PAGE)
                }
                _ => {}
            }
        }
        query
    }

    /// Parsea un query string (con o sin `?` inicial)
    pub fn from_query_string(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        Self::from_pairs(
            form_urlencoded::parse(raw.as_bytes()).map(|(k, v)| (k.into_owned(), v.into_owned())),
        )
    }

    /// Nueva búsqueda: fija `q` y vuelve a la página 1 conservando filtros
    pub fn with_search(&self, q: &str) -> Self {
        Self {
            q: q.trim().to_string(),
            page: 1,
            ..self.clone()
        }
    }

    /// Aplica un conjunto de filtros completo: conserva `q` y `per_page`,
    /// vuelve a la página 1 y descarta los filtros anteriores.
    pub fn with_filters(&self, filters: &FilterSet) -> Self {
        Self {
            q: self.q.clone(),
            category: filters.category.clone(),
            min_price: filters.min_price,
            max_price: filters.max_price,
            sort_by: filters.sort_by,
            sort_order: filters.sort_order,
            page: 1,
            per_page: self.per_page,
        }
    }

    /// Cambia solo la página
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

fn format_price_param(value: f64) -> String {
    // 50.0 -> "50", 49.99 -> "49.99"
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(query: &ListingQuery) -> Vec<String> {
        query.to_pairs().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn default_query_serializes_page_only() {
        assert_eq!(
            ListingQuery::default().to_pairs(),
            vec![("page".to_string(), "1".to_string())]
        );
    }

    #[test]
    fn params_present_iff_non_default() {
        let query = ListingQuery {
            q: "laptop".to_string(),
            category: String::new(),
            min_price: Some(100.0),
            max_price: None,
            sort_by: SortBy::Price,
            sort_order: SortOrder::Desc,
            page: 3,
            per_page: DEFAULT_PER_PAGE,
        };
        assert_eq!(keys(&query), vec!["q", "min_price", "sort_by", "page"]);
    }

    #[test]
    fn round_trip_is_exact() {
        let queries = [
            ListingQuery::default(),
            ListingQuery {
                q: "silla ergonómica".to_string(),
                category: "Furniture & Home".to_string(),
                min_price: Some(49.99),
                max_price: Some(400.0),
                sort_by: SortBy::Name,
                sort_order: SortOrder::Asc,
                page: 7,
                per_page: 24,
            },
            ListingQuery {
                q: String::new(),
                category: "Electronics".to_string(),
                min_price: None,
                max_price: Some(1500.0),
                sort_by: SortBy::CreatedAt,
                sort_order: SortOrder::Asc,
                page: 1,
                per_page: DEFAULT_PER_PAGE,
            },
        ];
        for query in queries {
            let rebuilt = ListingQuery::from_query_string(&query.to_query_string());
            assert_eq!(rebuilt, query);
        }
    }

    #[test]
    fn parse_tolerates_garbage_like_the_backend() {
        let query = ListingQuery::from_query_string("?page=abc&per_page=500&min_price=cheap&sort_by=magic");
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, MAX_PER_PAGE);
        assert_eq!(query.min_price, None);
        assert_eq!(query.sort_by, SortBy::CreatedAt);

        let query = ListingQuery::from_query_string("page=0&per_page=0");
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 1);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = ListingQuery::from_query_string("utm_source=mail&q=mouse&page=2");
        assert_eq!(query.q, "mouse");
        assert_eq!(query.page, 2);
    }

    #[test]
    fn with_filters_resets_page_and_keeps_query() {
        let before = ListingQuery {
            q: "teclado".to_string(),
            category: "Electronics".to_string(),
            min_price: Some(10.0),
            max_price: Some(99.0),
            sort_by: SortBy::Price,
            sort_order: SortOrder::Asc,
            page: 5,
            per_page: 24,
        };
        let after = before.with_filters(&FilterSet {
            category: "Furniture".to_string(),
            min_price: None,
            max_price: None,
            sort_by: SortBy::Name,
            sort_order: SortOrder::Desc,
        });

        assert_eq!(after.q, "teclado");
        assert_eq!(after.page, 1);
        assert_eq!(after.per_page, 24);
        assert_eq!(after.category, "Furniture");
        // los filtros anteriores no sobreviven
        assert_eq!(after.min_price, None);
        assert_eq!(after.max_price, None);
        assert_eq!(after.sort_by, SortBy::Name);
    }

    #[test]
    fn with_search_trims_and_resets_page() {
        let before = ListingQuery {
            category: "Kitchen".to_string(),
            page: 4,
            ..ListingQuery::default()
        };
        let after = before.with_search("  cafetera  ");
        assert_eq!(after.q, "cafetera");
        assert_eq!(after.page, 1);
        assert_eq!(after.category, "Kitchen");
    }

    #[test]
    fn with_page_touches_nothing_else() {
        let before = ListingQuery {
            q: "yoga".to_string(),
            page: 2,
            ..ListingQuery::default()
        };
        let after = before.with_page(3);
        assert_eq!(after.page, 3);
        assert_eq!(
            ListingQuery { page: 2, ..after.clone() },
            before
        );
    }

    #[test]
    fn encodes_spaces_and_symbols() {
        let query = ListingQuery {
            q: "café & té".to_string(),
            ..ListingQuery::default()
        };
        let qs = query.to_query_string();
        assert!(!qs.contains(' '));
        assert_eq!(ListingQuery::from_query_string(&qs).q, "café & té");
    }
}
