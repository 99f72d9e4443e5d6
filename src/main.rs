use tracing::Level;
use vedam_study_buddy::App;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}
