use quadrix::expr::{evaluate_many, to_postfix, tokenize};

fn main() {
    pretty_env_logger::init();

    let expression = "4(sin(x))^2";
    let postfix = to_postfix(&tokenize(expression).unwrap()).unwrap();

    let xs: Vec<f64> = (0..=8).map(|i| i as f64 * 0.5).collect();
    let values = evaluate_many(&postfix, &xs).unwrap();
    for (x, y) in xs.iter().zip(values) {
        println!("f({:.1}) = {:.6}", x, y);
    }
}
