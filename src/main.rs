fn main() -> anyhow::Result<()> {
    blog_registry::cli::run()
}
