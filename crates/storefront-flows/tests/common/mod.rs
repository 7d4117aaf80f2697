// Scripted storefront - an in-memory Surface for driving the page graph without a browser
//
// Models the client application as a handful of screens. The order table
// shows `first_render` until the first reload and `after_reload` afterwards.
// Every call is recorded so tests can assert on the exact interaction sequence.

#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use storefront_flows::pages::login::{EMAIL_PLACEHOLDER, PASSWORD_PLACEHOLDER};
use storefront_flows::pages::orders_history::order_row;
use storefront_flows::{Error, OrderId, Result, Selector, Surface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Blank,
    Login,
    Dashboard,
    Orders,
    Summary(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Goto(String),
    Fill(String, String),
    Click(String),
    WaitFor(String, Option<Duration>),
    Reload,
    ExpectText(String, String),
}

#[derive(Debug)]
struct State {
    screen: Screen,
    username: String,
    password: String,
    email_input: String,
    password_input: String,
    first_render: Vec<String>,
    after_reload: Vec<String>,
    reloads: usize,
    fail_reload: bool,
    events: Vec<Event>,
}

/// Cloneable handle; clones share state so a test can inspect the session
/// after the page objects have consumed it.
#[derive(Debug, Clone)]
pub struct ScriptedStorefront {
    state: Arc<Mutex<State>>,
}

impl ScriptedStorefront {
    /// A storefront accepting `username`/`password` with no orders.
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                screen: Screen::Blank,
                username: username.to_string(),
                password: password.to_string(),
                email_input: String::new(),
                password_input: String::new(),
                first_render: Vec::new(),
                after_reload: Vec::new(),
                reloads: 0,
                fail_reload: false,
                events: Vec::new(),
            })),
        }
    }

    /// Orders listed before and after the first reload.
    pub fn with_orders(self, first_render: &[&str], after_reload: &[&str]) -> Self {
        {
            let mut state = self.state.lock();
            state.first_render = first_render.iter().map(|s| s.to_string()).collect();
            state.after_reload = after_reload.iter().map(|s| s.to_string()).collect();
        }
        self
    }

    /// Makes every reload fail.
    pub fn with_failing_reload(self) -> Self {
        self.state.lock().fail_reload = true;
        self
    }

    pub fn screen(&self) -> Screen {
        self.state.lock().screen.clone()
    }

    pub fn reloads(&self) -> usize {
        self.state.lock().reloads
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.lock().events.clone()
    }

    /// Timeouts passed to `wait_for`, in call order.
    pub fn waits(&self) -> Vec<Option<Duration>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::WaitFor(_, timeout) => Some(timeout),
                _ => None,
            })
            .collect()
    }
}

impl State {
    fn visible_orders(&self) -> &[String] {
        if self.reloads == 0 {
            &self.first_render
        } else {
            &self.after_reload
        }
    }

    fn visible_row(&self, selector: &Selector) -> Option<String> {
        if self.screen != Screen::Orders {
            return None;
        }
        self.visible_orders()
            .iter()
            .find(|id| order_row(&OrderId::new(id.as_str())) == *selector)
            .cloned()
    }

    fn visible_view_button(&self, selector: &Selector) -> Option<String> {
        if self.screen != Screen::Orders {
            return None;
        }
        self.visible_orders()
            .iter()
            .find(|id| {
                order_row(&OrderId::new(id.as_str())).within(Selector::role("button", "View"))
                    == *selector
            })
            .cloned()
    }
}

fn not_found(selector: &Selector) -> Error {
    Error::ElementNotFound {
        selector: selector.to_string(),
        detail: "no matching element on the current screen".to_string(),
    }
}

impl Surface for ScriptedStorefront {
    async fn goto(&self, url: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.events.push(Event::Goto(url.to_string()));
        state.screen = Screen::Login;
        Ok(())
    }

    async fn fill(&self, selector: &Selector, value: &str) -> Result<()> {
        let mut state = self.state.lock();
        state
            .events
            .push(Event::Fill(selector.to_string(), value.to_string()));

        if state.screen != Screen::Login {
            return Err(not_found(selector));
        }
        if *selector == Selector::placeholder(EMAIL_PLACEHOLDER) {
            state.email_input = value.to_string();
        } else if *selector == Selector::placeholder(PASSWORD_PLACEHOLDER) {
            state.password_input = value.to_string();
        } else {
            return Err(not_found(selector));
        }
        Ok(())
    }

    async fn click(&self, selector: &Selector) -> Result<()> {
        let mut state = self.state.lock();
        state.events.push(Event::Click(selector.to_string()));

        if *selector == Selector::role("button", "Login") {
            if state.screen != Screen::Login {
                return Err(not_found(selector));
            }
            // Wrong credentials leave the login form in place
            if state.email_input == state.username && state.password_input == state.password {
                state.screen = Screen::Dashboard;
            }
            return Ok(());
        }

        if *selector == Selector::role("button", "ORDERS") {
            return match state.screen {
                Screen::Dashboard | Screen::Orders => {
                    state.screen = Screen::Orders;
                    Ok(())
                }
                _ => Err(not_found(selector)),
            };
        }

        match state.visible_view_button(selector) {
            Some(id) => {
                state.screen = Screen::Summary(id);
                Ok(())
            }
            None => Err(not_found(selector)),
        }
    }

    async fn wait_for(&self, selector: &Selector, timeout: Option<Duration>) -> Result<()> {
        let mut state = self.state.lock();
        state
            .events
            .push(Event::WaitFor(selector.to_string(), timeout));

        match state.visible_row(selector) {
            Some(_) => Ok(()),
            None => Err(not_found(selector)),
        }
    }

    async fn reload(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.events.push(Event::Reload);
        if state.fail_reload {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "page crashed during reload",
            )));
        }
        state.reloads += 1;
        Ok(())
    }

    async fn expect_text(&self, selector: &Selector, expected: &str) -> Result<()> {
        let mut state = self.state.lock();
        state
            .events
            .push(Event::ExpectText(selector.to_string(), expected.to_string()));

        match &state.screen {
            Screen::Summary(_) if *selector == Selector::css(".tagline") => {
                if "Thank you for Shopping With Us".contains(expected) {
                    Ok(())
                } else {
                    Err(Error::Assertion(format!(
                        "'{}' does not contain '{}'",
                        "Thank you for Shopping With Us", expected
                    )))
                }
            }
            screen => Err(Error::Assertion(format!(
                "expected '{}' in '{}' but the screen is {:?}",
                expected, selector, screen
            ))),
        }
    }
}
