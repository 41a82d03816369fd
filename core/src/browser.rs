//! Browser seam: navigation, URL parameters and view notifications.
//!
//! View-models never touch the page directly. They call `refresh()` after
//! every state transition so the host can re-render from the model's
//! accessors, and bracket network calls with `loading()` / `loaded()`.

pub trait Browser {
    fn redirect(&self, url: &str);

    fn url_parameter(&self, name: &str) -> Option<String>;

    fn loading(&self) {}

    fn loaded(&self) {}

    fn refresh(&self) {}
}

impl<T: Browser + ?Sized> Browser for &T {
    fn redirect(&self, url: &str) {
        (**self).redirect(url)
    }

    fn url_parameter(&self, name: &str) -> Option<String> {
        (**self).url_parameter(name)
    }

    fn loading(&self) {
        (**self).loading()
    }

    fn loaded(&self) {
        (**self).loaded()
    }

    fn refresh(&self) {
        (**self).refresh()
    }
}

impl<T: Browser + ?Sized> Browser for std::rc::Rc<T> {
    fn redirect(&self, url: &str) {
        (**self).redirect(url)
    }

    fn url_parameter(&self, name: &str) -> Option<String> {
        (**self).url_parameter(name)
    }

    fn loading(&self) {
        (**self).loading()
    }

    fn loaded(&self) {
        (**self).loaded()
    }

    fn refresh(&self) {
        (**self).refresh()
    }
}
