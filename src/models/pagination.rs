// ============================================================================
// PAGINACIÓN - Modelo del backend + ventana de páginas para la UI
// ============================================================================

use serde::{Deserialize, Serialize};

/// Bloque `pagination` que devuelve el backend en todos los listados
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PaginationView {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
    #[serde(default)]
    pub prev_num: Option<u32>,
    #[serde(default)]
    pub next_num: Option<u32>,
}

impl Default for PaginationView {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 12,
            total: 0,
            pages: 0,
            has_prev: false,
            has_next: false,
            prev_num: None,
            next_num: None,
        }
    }
}

/// Bloque `search_info` que añade el endpoint de búsqueda
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SearchInfo {
    pub query: String,
    pub total_found: u64,
    pub total_products: u64,
}

/// Entrada de la botonera de paginación
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Ancho por defecto de la botonera (contando extremos y elipsis)
pub const DEFAULT_PAGE_WINDOW: u32 = 7;

/// Ventana de páginas centrada en `current_page` con el ancho por defecto.
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    page_window_sized(current_page, total_pages, DEFAULT_PAGE_WINDOW)
}

/// Calcula qué botones de página mostrar.
///
/// - Con 0 o 1 páginas no se muestra nada.
/// - Hasta `window_size` páginas se muestran todas.
/// - Con más, siempre aparecen la 1 y la última; en medio va un tramo de
///   largo constante centrado en la página actual, con elipsis donde el
///   tramo no toca los extremos. El resultado nunca supera `window_size`
///   entradas.
pub fn page_window_sized(current_page: u32, total_pages: u32, window_size: u32) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }
    if total_pages <= window_size {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    // Tramo interior: extremos + dos elipsis consumen 4 posiciones
    let run = window_size.saturating_sub(4).max(1);
    let mut start = current_page.saturating_sub(run / 2).max(2);
    let mut end = start + run - 1;
    if end >= total_pages - 1 {
        end = total_pages - 1;
        start = end.saturating_sub(run - 1).max(2);
    }

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    for page in start..=end {
        items.push(PageItem::Page(page));
    }
    if end < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::*;

    fn pages_of(items: &[PageItem]) -> Vec<u32> {
        items
            .iter()
            .filter_map(|item| match item {
                Page(n) => Some(*n),
                Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn middle_of_ten_pages() {
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn nothing_rendered_for_single_page() {
        assert!(page_window(1, 0).is_empty());
        assert!(page_window(1, 1).is_empty());
    }

    #[test]
    fn small_totals_show_every_page() {
        for total in 2..=7 {
            let items = page_window(1, total);
            assert_eq!(pages_of(&items), (1..=total).collect::<Vec<_>>());
            assert!(!items.contains(&Ellipsis));
        }
    }

    #[test]
    fn near_start_has_single_trailing_ellipsis() {
        assert_eq!(
            page_window(2, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn near_end_has_single_leading_ellipsis() {
        assert_eq!(
            page_window(9, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn extremes_always_present() {
        for total in [8, 15, 40, 200] {
            for current in 1..=total {
                let pages = pages_of(&page_window(current, total));
                assert_eq!(pages.first(), Some(&1), "total={} current={}", total, current);
                assert_eq!(pages.last(), Some(&total), "total={} current={}", total, current);
            }
        }
    }

    #[test]
    fn current_page_always_listed() {
        for total in [8, 13, 50] {
            for current in 1..=total {
                let pages = pages_of(&page_window(current, total));
                assert!(pages.contains(&current), "total={} current={}", total, current);
            }
        }
    }

    #[test]
    fn never_wider_than_window() {
        for total in 1..=60 {
            for current in 1..=total {
                let items = page_window(current, total);
                assert!(
                    items.len() <= DEFAULT_PAGE_WINDOW as usize,
                    "total={} current={} -> {} entradas",
                    total,
                    current,
                    items.len()
                );
            }
        }
    }

    #[test]
    fn window_shifts_one_step_at_a_time() {
        let inner_start = |current: u32, total: u32| -> u32 {
            pages_of(&page_window(current, total))
                .into_iter()
                .filter(|p| *p > 1)
                .next()
                .unwrap()
        };
        for total in [10, 25, 100] {
            for current in 1..total {
                let a = inner_start(current, total);
                let b = inner_start(current + 1, total);
                assert!(b >= a && b - a <= 1, "total={} current={}: {} -> {}", total, current, a, b);
            }
        }
    }

    #[test]
    fn pagination_view_default_is_zeroed() {
        let view = PaginationView::default();
        assert_eq!(view.page, 1);
        assert_eq!(view.per_page, 12);
        assert_eq!(view.total, 0);
        assert_eq!(view.pages, 0);
        assert!(!view.has_prev && !view.has_next);
    }

    #[test]
    fn deserializes_backend_nulls_in_prev_next() {
        let json = r#"{
            "page": 1, "per_page": 12, "total": 5, "pages": 1,
            "has_prev": false, "has_next": false,
            "prev_num": null, "next_num": null
        }"#;
        let view: PaginationView = serde_json::from_str(json).unwrap();
        assert_eq!(view.prev_num, None);
        assert_eq!(view.next_num, None);
    }
}
