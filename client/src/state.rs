use std::cell::RefCell;
use std::rc::Rc;

use crate::hook::DrawHook;
use crate::listener::Listener;

/// Everything the running page owns. Dropping it removes every listener.
pub struct App {
    pub hook: Rc<RefCell<DrawHook>>,
    pub listeners: Vec<Listener>,
}

impl Drop for App {
    fn drop(&mut self) {
        self.listeners.clear();
        self.hook.borrow_mut().detach();
    }
}
