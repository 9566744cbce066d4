use quadrix::expr::{to_postfix, tokenize};
use quadrix::{integrate_expression, QuadratureRule};

fn main() {
    pretty_env_logger::init();

    let expression = "(x+1)(x+2)";
    let infix = tokenize(expression).unwrap();
    let postfix = to_postfix(&infix).unwrap();
    println!("Input:   {}", expression);
    println!("Infix:   {}", infix);
    println!("Postfix: {}", postfix);

    for rule in [QuadratureRule::Simpson, QuadratureRule::Trapezoidal] {
        match integrate_expression(expression, 0.0, 1.0, rule, 10) {
            Ok(result) => println!("{} over [0, 1]: {}", rule, result),
            Err(err) => println!("Error: {}", err),
        }
    }
}
