//! Page-load guard: authentication check, identity render, logout wiring,
//! and admin-only visibility. Requires a browser environment.
//!
//! Include the compiled module at the end of each page that requires
//! authentication; [`install`] runs the pass once the document is ready.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::session::{AuthCheck, User};
use crate::store::{BrowserStorage, SessionStore};

pub const LOGIN_PAGE: &str = "/login.html";

const USER_DISPLAY_ID: &str = "userDisplay";
const LOGOUT_BUTTON_ID: &str = "logoutBtn";
const ADMIN_ONLY_SELECTOR: &str = ".admin-only";

/// Run the guard pass exactly once regardless of script placement: defers
/// to `DOMContentLoaded` while the document is still parsing, otherwise
/// runs immediately.
pub fn install() {
    let Some(document) = document() else { return };
    if document.ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut()>::new(init_auth_ui);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
        // The listener must outlive this call; one leaked closure per page load.
        on_ready.forget();
    } else {
        init_auth_ui();
    }
}

/// Unauthenticated visitors are redirected before any DOM update; nothing
/// else in the pass runs for them.
fn init_auth_ui() {
    let store = SessionStore::browser();
    match store.check() {
        AuthCheck::Unauthenticated => redirect_to_login(),
        AuthCheck::Authenticated(user) => {
            render_identity(&user);
            setup_logout();
            apply_role_based_visibility(&store);
        }
    }
}

fn render_identity(user: &User) {
    if let Some(el) = element_by_id(USER_DISPLAY_ID) {
        el.set_text_content(Some(&user.display_label()));
    }
}

/// Hides every `.admin-only` element for non-admin roles by suppressing
/// its display. Hide-only: elements already hidden by other means are
/// never re-shown, and admins leave everything untouched.
fn apply_role_based_visibility(store: &SessionStore<BrowserStorage>) {
    if store.is_admin() {
        return;
    }
    let Some(document) = document() else { return };
    let Ok(nodes) = document.query_selector_all(ADMIN_ONLY_SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        if let Some(el) = node.dyn_ref::<web_sys::HtmlElement>() {
            let _ = el.style().set_property("display", "none");
        }
    }
}

fn setup_logout() {
    let Some(button) = element_by_id(LOGOUT_BUTTON_ID) else {
        return;
    };
    let on_click = Closure::<dyn FnMut()>::new(logout);
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

/// Clears all session slots and navigates to the login page. Purely local:
/// the token is not revoked server-side and stays valid until it expires.
pub fn logout() {
    SessionStore::browser().clear();
    redirect_to_login();
}

fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PAGE);
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document().and_then(|d| d.get_element_by_id(id))
}
