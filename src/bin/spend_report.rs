use spend_tracker::{
    config::{Config, ConfigManager},
    init, Budget, Category, ConfigError,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let config = ConfigManager::from_env().load()?;
    let budget = sample_budget();
    print!("{}", render(&budget, &config));
    Ok(())
}

fn sample_budget() -> Budget {
    let mut food = Category::new("Food");
    food.deposit(1000.0, "initial deposit");
    food.withdraw(10.15, "groceries");
    food.withdraw(15.89, "restaurant and more food for dessert");

    let mut clothing = Category::new("Clothing");
    food.transfer(50.0, &mut clothing);
    clothing.withdraw(25.55, "");
    clothing.withdraw(100.0, "");

    let mut auto = Category::new("Auto");
    auto.deposit(1000.0, "initial deposit");
    auto.withdraw(15.0, "");

    let mut budget = Budget::new();
    for category in [food, clothing, auto] {
        if let Err(err) = budget.add_category(category) {
            tracing::warn!(%err, "skipping sample category");
        }
    }
    budget
}

fn render(budget: &Budget, config: &Config) -> String {
    let mut out = String::new();
    for category in budget.categories() {
        out.push_str(&category.statement(&config.statement));
        out.push_str("\n\n");
    }
    out.push_str(&budget.spend_chart(&config.chart));
    out.push('\n');
    out
}
