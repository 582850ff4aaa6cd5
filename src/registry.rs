//! Shared locale, digit-precision and option state with a derived formatter
//!
//! A [`FormatterRegistry`] is a cheap handle: clones share the same fields, so UI
//! components holding a clone all see one locale, one precision and one option
//! record. Separate registries built with [`FormatterRegistry::init`] are isolated.
//!
//! The host locale provider is acquired once, when the registry is built, and its
//! current value is read each time the formatter is derived without an override.
//! The derived formatter is computed by [`derive_formatter`] on the first read after
//! any input changed. Construction errors from [`NumberFormat::new`] are returned
//! unchanged.

use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::config::RegistryConfig;
use crate::env::environment_locale;
use crate::error::Result;
use crate::formatter::NumberFormat;
use crate::types::{FormatOptions, NumberFormatOptions};

/// Digit precision of a fresh registry
pub const DEFAULT_DIGITS: u32 = 2;

/// The surrounding application's report of its current display locale
///
/// The registry keeps the provider and asks it again on every derivation, so a
/// provider backed by mutable application state reports language switches.
pub trait HostLocaleProvider {
    /// ISO locale name, if the host has one
    fn iso_name(&self) -> Option<String>;
}

impl<F> HostLocaleProvider for F
where
    F: Fn() -> Option<String>,
{
    fn iso_name(&self) -> Option<String> {
        self()
    }
}

/// A host that never reports a locale
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHostLocale;

impl HostLocaleProvider for NoHostLocale {
    fn iso_name(&self) -> Option<String> {
        None
    }
}

/// A host whose locale is fixed when the provider is built
#[derive(Debug, Clone, Default)]
pub struct StaticHostLocale(pub Option<String>);

impl HostLocaleProvider for StaticHostLocale {
    fn iso_name(&self) -> Option<String> {
        self.0.clone()
    }
}

impl From<&str> for StaticHostLocale {
    fn from(locale: &str) -> Self {
        Self(Some(locale.to_string()))
    }
}

/// Build a formatter from explicit inputs
///
/// `locale` wins when non-empty, otherwise `fallback_locale` is used. `digits` is
/// applied as both the minimum and maximum fraction digits.
pub fn derive_formatter(
    locale: &str,
    digits: u32,
    options: &FormatOptions,
    fallback_locale: &str,
) -> Result<NumberFormat> {
    let tag = if locale.is_empty() {
        fallback_locale
    } else {
        locale
    };
    let options = NumberFormatOptions::from(options.clone()).with_fraction_digits(digits);
    NumberFormat::new(tag, &options)
}

#[derive(Debug)]
struct CachedFormatter {
    generation: u64,
    /// Fallback locale the formatter was derived with; empty under an override
    fallback_locale: String,
    formatter: NumberFormat,
}

#[derive(Debug)]
struct RegistryState {
    locale: String,
    digits: u32,
    options: FormatOptions,
    /// Bumped on every change so a cached formatter can be recognized as stale
    generation: u64,
    cached: Option<CachedFormatter>,
}

impl RegistryState {
    fn touch(&mut self) {
        self.generation += 1;
        self.cached = None;
    }
}

struct Shared {
    host: Rc<dyn HostLocaleProvider>,
    environment_locale: String,
    state: RefCell<RegistryState>,
}

impl fmt::Debug for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared")
            .field("environment_locale", &self.environment_locale)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Handle onto shared formatting state
#[derive(Debug, Clone)]
pub struct FormatterRegistry {
    shared: Rc<Shared>,
}

impl FormatterRegistry {
    /// Create a registry around `host`, reading the OS locale once
    pub fn init(host: impl HostLocaleProvider + 'static) -> Self {
        Self::with_host(host, environment_locale())
    }

    /// Create a registry with an explicit environment locale
    pub fn with_host(
        host: impl HostLocaleProvider + 'static,
        environment_locale: impl Into<String>,
    ) -> Self {
        let environment_locale = environment_locale.into();
        debug!(
            environment_locale = %environment_locale,
            "initialized formatter registry"
        );

        Self {
            shared: Rc::new(Shared {
                host: Rc::new(host),
                environment_locale,
                state: RefCell::new(RegistryState {
                    locale: String::new(),
                    digits: DEFAULT_DIGITS,
                    options: FormatOptions::default(),
                    generation: 0,
                    cached: None,
                }),
            }),
        }
    }

    /// Create a registry with a fixed host locale and environment locale
    ///
    /// An empty host locale counts as absent.
    pub fn with_fallbacks(host_locale: Option<String>, environment_locale: impl Into<String>) -> Self {
        Self::with_host(StaticHostLocale(host_locale), environment_locale)
    }

    /// Locale override; empty when unset
    pub fn locale(&self) -> String {
        self.shared.state.borrow().locale.clone()
    }

    pub fn set_locale(&self, locale: impl Into<String>) {
        let locale = locale.into();
        let mut state = self.shared.state.borrow_mut();
        if state.locale != locale {
            trace!(from = %state.locale, to = %locale, "locale override changed");
            state.locale = locale;
            state.touch();
        }
    }

    pub fn clear_locale(&self) {
        self.set_locale(String::new());
    }

    pub fn digits(&self) -> u32 {
        self.shared.state.borrow().digits
    }

    pub fn set_digits(&self, digits: u32) {
        let mut state = self.shared.state.borrow_mut();
        if state.digits != digits {
            trace!(from = state.digits, to = digits, "digit precision changed");
            state.digits = digits;
            state.touch();
        }
    }

    pub fn options(&self) -> FormatOptions {
        self.shared.state.borrow().options.clone()
    }

    pub fn set_options(&self, options: FormatOptions) {
        let mut state = self.shared.state.borrow_mut();
        if state.options != options {
            trace!(?options, "format options changed");
            state.options = options;
            state.touch();
        }
    }

    /// Modify the format options in place
    pub fn update_options(&self, f: impl FnOnce(&mut FormatOptions)) {
        let mut options = self.options();
        f(&mut options);
        self.set_options(options);
    }

    /// Set every field named in `config`, leaving the others untouched
    pub fn apply_config(&self, config: &RegistryConfig) {
        if let Some(locale) = &config.locale {
            self.set_locale(locale.as_str());
        }
        if let Some(digits) = config.digits {
            self.set_digits(digits);
        }
        if let Some(options) = &config.options {
            self.set_options(options.clone());
        }
    }

    /// The host's current locale; empty names count as absent
    pub fn host_locale(&self) -> Option<String> {
        self.shared.host.iso_name().filter(|l| !l.is_empty())
    }

    pub fn environment_locale(&self) -> &str {
        &self.shared.environment_locale
    }

    /// Locale used while no override is set: host locale, else environment default
    pub fn fallback_locale(&self) -> String {
        self.host_locale()
            .unwrap_or_else(|| self.shared.environment_locale.clone())
    }

    /// The formatter for the current inputs
    ///
    /// Reads without intervening changes return equal formatters. The host locale
    /// is consulted only while no override is set. Failures are not cached, so the
    /// next read retries with whatever the inputs hold then.
    pub fn formatter(&self) -> Result<NumberFormat> {
        let overridden = !self.shared.state.borrow().locale.is_empty();
        // Read outside the state borrow so a provider may consult this registry
        let fallback_locale = if overridden {
            String::new()
        } else {
            self.fallback_locale()
        };

        let mut state = self.shared.state.borrow_mut();
        if let Some(cached) = &state.cached {
            if cached.generation == state.generation && cached.fallback_locale == fallback_locale {
                return Ok(cached.formatter.clone());
            }
        }

        let formatter = derive_formatter(
            &state.locale,
            state.digits,
            &state.options,
            &fallback_locale,
        )?;
        debug!(
            locale = %formatter.requested_locale(),
            digits = state.digits,
            generation = state.generation,
            "derived number formatter"
        );
        state.cached = Some(CachedFormatter {
            generation: state.generation,
            fallback_locale,
            formatter: formatter.clone(),
        });
        Ok(formatter)
    }

    /// Format with the current formatter
    pub fn format(&self, value: f64) -> Result<String> {
        Ok(self.formatter()?.format(value))
    }

    /// Whether two handles share the same state
    pub fn shares_state_with(&self, other: &FormatterRegistry) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

thread_local! {
    static REGISTRY: OnceCell<FormatterRegistry> = const { OnceCell::new() };
}

/// The registry shared by everything on this thread
///
/// The first call initializes it with `host`; later calls drop `host` and return
/// another handle to the same state.
pub fn get_or_init_registry<H: HostLocaleProvider + 'static>(host: H) -> FormatterRegistry {
    REGISTRY.with(|cell| cell.get_or_init(|| FormatterRegistry::init(host)).clone())
}
