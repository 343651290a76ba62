fn main() {
    shopfront::mount();
}
