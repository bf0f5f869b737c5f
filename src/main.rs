use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use waifu_viewer::app::AppContext;
use waifu_viewer::config::Config;
use waifu_viewer::logging::init_tracing;
use waifu_viewer::ui::mvi::Dispatcher;
use waifu_viewer::ui::navigation::{BackStack, Destination, NavCommand, Navigator};
use waifu_viewer::ui::screens::home::{HomeIntent, HomeState};
use waifu_viewer::ui::screens::login::{LoginEvent, LoginIntent, LoginState};
use waifu_viewer::ui::screens::splash::SplashEvent;
use waifu_viewer::ui::theme::{ThemeIntent, ThemeMode, ThemeReducer};

#[derive(Parser)]
#[command(name = "waifu-viewer", version, about = "Browse portrait images from waifu.im")]
struct Cli {
    /// Config file (default: <config dir>/waifu-viewer/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// First screen: splash, login or home
    #[arg(long, default_value = "splash")]
    start: Destination,

    /// Log in with this identifier instead of prompting
    #[arg(long)]
    identifier: Option<String>,

    /// Number of images to request
    #[arg(long)]
    limit: Option<usize>,

    /// light, dark or system
    #[arg(long)]
    theme: Option<ThemeMode>,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// How a screen was left.
enum Exit {
    Navigate(NavCommand),
    Quit,
}

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(limit) = cli.limit {
        config.home.page_size = limit;
    }
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }

    let ctx = AppContext::from_config(config)?;
    let mut dispatcher = Dispatcher::new();
    let mut navigator = BackStack::new(cli.start);
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut identifier = cli.identifier;

    while let Some(destination) = navigator.current() {
        let exit = match destination {
            Destination::Splash => run_splash(&ctx, &mut dispatcher).await,
            Destination::Login => {
                run_login(&ctx, &mut dispatcher, &mut input, identifier.take()).await?
            }
            Destination::Home => run_home(&ctx, &mut dispatcher, &mut input).await?,
        };
        match exit {
            Exit::Navigate(command) => navigator.navigate(command),
            Exit::Quit => break,
        }
    }

    Ok(())
}

async fn run_splash(ctx: &AppContext, dispatcher: &mut Dispatcher) -> Exit {
    let view_model = ctx.splash_view_model(dispatcher.handle());
    let mut events = view_model.base().events();
    println!("WFC");

    loop {
        tokio::select! {
            biased;
            _ = dispatcher.run_next() => {}
            Some(SplashEvent::NavigateTo(command)) = events.next() => return Exit::Navigate(command),
            _ = tokio::signal::ctrl_c() => return Exit::Quit,
        }
    }
}

async fn run_login(
    ctx: &AppContext,
    dispatcher: &mut Dispatcher,
    input: &mut Input,
    identifier: Option<String>,
) -> anyhow::Result<Exit> {
    let view_model = ctx.login_view_model(dispatcher.handle());
    let mut states = view_model.base().observe();
    let mut events = view_model.base().events();
    let mut input_open = true;

    if let Some(identifier) = identifier {
        view_model.on_intent(LoginIntent::IdentifierChanged(identifier));
        view_model.on_intent(LoginIntent::LoginClicked);
    }

    loop {
        let loading = view_model.base().state().is_loading;
        tokio::select! {
            biased;
            Some(state) = states.next() => render_login(&state),
            Some(event) = events.next() => match event {
                LoginEvent::NavigateTo(command) => return Ok(Exit::Navigate(command)),
                LoginEvent::ShowError(message) => eprintln!("! {}", message),
            },
            _ = dispatcher.run_next() => {}
            line = input.next_line(), if input_open && !loading => match line? {
                Some(line) => {
                    view_model.on_intent(LoginIntent::IdentifierChanged(line.trim().to_string()));
                    view_model.on_intent(LoginIntent::LoginClicked);
                }
                None => input_open = false,
            },
            _ = tokio::signal::ctrl_c() => return Ok(Exit::Quit),
        }
        if !input_open && !view_model.base().state().is_loading {
            // No more input: follow a navigation that is already queued,
            // otherwise there is nothing left to do.
            while let Some(event) = events.try_next() {
                match event {
                    LoginEvent::NavigateTo(command) => return Ok(Exit::Navigate(command)),
                    LoginEvent::ShowError(message) => eprintln!("! {}", message),
                }
            }
            return Ok(Exit::Quit);
        }
    }
}

fn render_login(state: &LoginState) {
    if state.is_loading {
        println!("Signing in as {}...", state.identifier);
    } else if let Some(error) = &state.error_message {
        println!("{}", error);
        println!("Identifier:");
    } else {
        println!("Identifier:");
    }
}

async fn run_home(
    ctx: &AppContext,
    dispatcher: &mut Dispatcher,
    input: &mut Input,
) -> anyhow::Result<Exit> {
    let view_model = ctx.home_view_model(dispatcher.handle());
    let theme = ctx.theme();
    let mut states = view_model.base().observe();
    let mut themes = theme.observe();
    let mut input_open = true;

    loop {
        tokio::select! {
            biased;
            Some(state) = states.next() => {
                let dark = theme.current().mode.is_dark(false);
                render_home(&state, dark);
            }
            Some(theme_state) = themes.next() => println!("[theme: {:?}]", theme_state.mode),
            _ = dispatcher.run_next() => {}
            line = input.next_line(), if input_open => match line?.as_deref().map(str::trim) {
                Some("r") => {
                    if view_model.base().state().can_retry() {
                        view_model.on_intent(HomeIntent::Retry);
                    }
                }
                Some("t") => theme.dispatch::<ThemeReducer>(ThemeIntent::Next),
                Some("l") => return Ok(Exit::Navigate(NavCommand::to(Destination::Login))),
                Some("q") => return Ok(Exit::Quit),
                Some(_) => println!("r: retry  t: theme  l: login  q: quit"),
                None => input_open = false,
            },
            _ = tokio::signal::ctrl_c() => return Ok(Exit::Quit),
        }
        if !input_open && !view_model.base().state().is_loading && !states.has_changed() {
            return Ok(Exit::Quit);
        }
    }
}

fn render_home(state: &HomeState, dark: bool) {
    let bullet = if dark { "*" } else { "-" };
    if state.is_loading {
        println!("Loading...");
        return;
    }
    for image in &state.images {
        println!(
            "{} #{:<6} {:>4}x{:<4} {}",
            bullet,
            image.id,
            image.width,
            image.height,
            image.thumbnail_url()
        );
    }
    if let Some(error) = &state.error_message {
        println!("{}", error);
        println!("r: retry  q: quit");
    }
}
