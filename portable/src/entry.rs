//! Platform independent application entry points.
//!
//! Every program provides the same two hooks: [`App::setup`], run once at start,
//! and [`App::body`], run over and over again forever. How they get called
//! depends on the platform:
//!
//! - where nothing drives the application, [`run`] / [`run_app`] call `setup`
//!   once and then `body` in an endless loop;
//! - where the platform brings its own scheduler, an adapter implements
//!   [`Scheduler`] and the app is handed over with [`register`].

/// The two lifecycle hooks of a portable application.
pub trait App {
    /// Runs once, before the first call to [`App::body`].
    fn setup(&mut self);

    /// Runs repeatedly, forever.
    fn body(&mut self);
}

/// An [`App`] made of an initializer closure and a body closure.
pub struct Hooks<S, B> {
    setup: Option<S>,
    body: B,
}

/// Builds an [`App`] from two closures.
pub fn hooks<S, B>(setup: S, body: B) -> Hooks<S, B>
where
    S: FnOnce(),
    B: FnMut(),
{
    Hooks {
        setup: Some(setup),
        body,
    }
}

impl<S, B> App for Hooks<S, B>
where
    S: FnOnce(),
    B: FnMut(),
{
    fn setup(&mut self) {
        if let Some(setup) = self.setup.take() {
            setup();
        }
    }

    fn body(&mut self) {
        (self.body)();
    }
}

impl<A: App + ?Sized> App for &mut A {
    fn setup(&mut self) {
        (**self).setup();
    }

    fn body(&mut self) {
        (**self).body();
    }
}

/// Drives an [`App`] one call at a time: the first step runs `setup`, every
/// later step runs `body`.
pub struct Driver<A> {
    app: A,
    started: bool,
    iterations: u64,
}

impl<A: App> Driver<A> {
    pub fn new(app: A) -> Self {
        Driver {
            app,
            started: false,
            iterations: 0,
        }
    }

    pub fn step(&mut self) {
        if self.started {
            self.app.body();
            self.iterations = self.iterations.wrapping_add(1);
        } else {
            self.app.setup();
            self.started = true;
            debug!("setup done, entering body loop");
        }
    }

    /// Number of completed body calls.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn into_inner(self) -> A {
        self.app
    }

    /// Steps forever, without delay or yield.
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }
}

/// Self-driving entry: calls `setup` once, then `body` forever.
pub fn run<S, B>(setup: S, body: B) -> !
where
    S: FnOnce(),
    B: FnMut(),
{
    run_app(hooks(setup, body))
}

/// Self-driving entry for an [`App`] value.
pub fn run_app<A: App>(app: A) -> ! {
    Driver::new(app).run()
}

/// A platform scheduler that calls the hooks itself.
///
/// The scheduler must call `setup` once and let it return before it calls
/// `body`, and must never run `body` concurrently with itself.
pub trait Scheduler {
    type Error;

    fn register(&mut self, app: &'static mut dyn App) -> Result<(), Self::Error>;
}

/// Managed entry: hands `app` to the platform's scheduler.
pub fn register<S: Scheduler>(scheduler: &mut S, app: &'static mut dyn App) -> Result<(), S::Error> {
    info!("registering application with the platform scheduler");
    scheduler.register(app)
}
