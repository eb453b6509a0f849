fn main() {
    ticklist_frontend::start();
}
