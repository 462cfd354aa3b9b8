#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::config::Config;
    use crate::gateway::{GatewayRequest, GatewayResponse};
    use crate::suggestion::Suggestion;

    /// App wired to in-memory channels standing in for the gateway worker
    pub struct TestApp {
        pub app: App,
        pub requests: UnboundedReceiver<GatewayRequest>,
        pub responses: mpsc::Sender<GatewayResponse>,
    }

    impl TestApp {
        pub fn drain_requests(&mut self) -> Vec<GatewayRequest> {
            let mut requests = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                requests.push(request);
            }
            requests
        }

        /// Deliver a worker response and apply it
        pub fn respond(&mut self, response: GatewayResponse) {
            self.responses.send(response).unwrap();
            assert!(self.app.tick());
        }

        /// Issue a suggest for `query` and answer it with `commands`
        pub fn show_suggestions(&mut self, query: &str, commands: &[&str]) {
            type_text(&mut self.app, query);
            self.app.handle_key_event(key(KeyCode::Enter));
            let ticket = match self.drain_requests().pop() {
                Some(GatewayRequest::Suggest { ticket, .. }) => ticket,
                other => panic!("expected a suggest request, got {:?}", other),
            };
            self.respond(GatewayResponse::Suggestions {
                ticket,
                result: Ok(commands.iter().map(|c| Suggestion::new(*c)).collect()),
            });
        }
    }

    pub fn test_config() -> Config {
        let mut config = Config::default();
        config.display.greeting = false;
        config
    }

    pub fn test_app() -> App {
        App::new(&test_config())
    }

    pub fn wired_app() -> TestApp {
        let (request_tx, requests) = unbounded_channel();
        let (responses, response_rx) = mpsc::channel();
        let mut app = test_app();
        app.controller.set_channels(request_tx, response_rx);
        TestApp {
            app,
            requests,
            responses,
        }
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }
}
