use std::rc::Rc;

use yew::Callback;

use crate::call::VoiceCall;
use crate::purchase::Purchase;
use crate::router::Router;
use crate::session::SessionStore;
use crate::toast::Toast;

/// Compares two trait-object handles by the object they point at.
pub fn same_instance<T: ?Sized>(a: &Rc<T>, b: &Rc<T>) -> bool {
    std::ptr::eq(Rc::as_ptr(a).cast::<()>(), Rc::as_ptr(b).cast::<()>())
}

/// Everything a page needs from the outside, built once in `main` and passed
/// down as a property.
#[derive(Clone)]
pub struct Services {
    pub router: Router,
    pub purchase: Purchase,
    pub store: Rc<dyn SessionStore>,
    pub voice: VoiceCall,
    pub notify: Callback<Toast>,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        self.router == other.router
            && self.purchase == other.purchase
            && same_instance(&self.store, &other.store)
            && self.voice == other.voice
            && self.notify == other.notify
    }
}
