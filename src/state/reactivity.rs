// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================
// Los stores envuelven su estado en un ReactiveState compartido y los hooks
// se suscriben para re-renderizar. Cada suscripción recibe un id con el que
// darse de baja al desmontar el componente.
// ============================================================================

use std::cell::{Cell, RefCell};

type Callback = Box<dyn Fn()>;

pub type SubscriptionId = usize;

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Callback)>>,
    next_id: Cell<SubscriptionId>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Copia del valor actual
    pub fn snapshot(&self) -> T {
        self.value.borrow().clone()
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar con un closure y notificar. Devuelve lo que el closure
    /// produzca (p. ej. el epoch de un fetch recién arrancado).
    pub fn update<F, R>(&self, updater: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = updater(&mut *self.value.borrow_mut());
        self.notify();
        result
    }

    /// Suscribirse a cambios; el id sirve para `unsubscribe`
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sub_id, _)| *sub_id != id);
    }

    fn notify(&self) {
        for (_, callback) in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn set_and_update_notify_subscribers() {
        let state = ReactiveState::new(0);
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1));
        }

        state.set(1);
        state.update(|v| *v += 1);

        assert_eq!(hits.get(), 2);
        assert_eq!(state.snapshot(), 2);
    }

    #[test]
    fn unsubscribed_callbacks_stop_firing() {
        let state = ReactiveState::new(0);
        let hits = Rc::new(Cell::new(0));
        let id = {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1))
        };

        state.set(1);
        state.unsubscribe(id);
        state.set(2);

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn update_returns_the_closure_result() {
        let state = ReactiveState::new(10);
        let doubled = state.update(|v| {
            *v *= 2;
            *v
        });
        assert_eq!(doubled, 20);
    }
}
