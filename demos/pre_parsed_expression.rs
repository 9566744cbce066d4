use log::debug;
use quadrix::expr::Tokenizer;
use quadrix::integrate::Integrator;
use quadrix::{Expression, QuadratureRule};

fn main() {
    pretty_env_logger::init();

    let tokenizer = Tokenizer::new().strict(true);
    let expression =
        Expression::parse_with(&tokenizer, "exp(x) - ln(x + 1)").expect("Failed to parse");
    debug!("postfix: {}", expression.postfix());

    let rule: QuadratureRule = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("simpson")
        .parse()
        .expect("Unknown rule");

    for strips in [2, 4, 8, 16, 32, 64] {
        let integrator = Integrator::new().rule(rule).strips(strips);
        match integrator.integrate(expression.postfix(), 0.0, 2.0) {
            Ok(result) => println!("{} with {:>2} strips: {}", rule, strips, result),
            Err(err) => println!("Error: {}", err),
        }
    }
}
