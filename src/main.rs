fn main() {
    missiteam_site::run();
}
