// ============================================================================
// SUGGESTIONS - Política de autocompletado del buscador
// ============================================================================
// Las sugerencias se piden con debounce y pueden llegar fuera de orden:
// solo la respuesta de la última petición emitida puede tocar el estado
// (last-write-wins).
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

/// Espera tras la última tecla antes de pedir sugerencias
pub const SUGGESTIONS_DEBOUNCE_MS: u32 = 300;

/// Por debajo de este largo no se pide nada y el desplegable se vacía
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

pub fn should_fetch_suggestions(q: &str) -> bool {
    q.trim().chars().count() >= MIN_SUGGESTION_QUERY_LEN
}

/// Contador monótono compartido entre peticiones en vuelo. Cada petición
/// reserva un número con `issue` y comprueba con `is_current` antes de
/// escribir; una petición más nueva invalida a todas las anteriores.
#[derive(Clone, Default)]
pub struct Sequencer {
    latest: Rc<Cell<u64>>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        let id = self.latest.get() + 1;
        self.latest.set(id);
        id
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.latest.get() == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_do_not_fetch() {
        assert!(!should_fetch_suggestions(""));
        assert!(!should_fetch_suggestions("a"));
        assert!(!should_fetch_suggestions("  a  "));
        assert!(should_fetch_suggestions("ab"));
        assert!(should_fetch_suggestions("ñu"));
    }

    #[test]
    fn only_the_latest_request_wins() {
        let seq = Sequencer::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let seq = Sequencer::new();
        let other = seq.clone();
        let id = seq.issue();
        assert!(other.is_current(id));
        other.issue();
        assert!(!seq.is_current(id));
    }
}
