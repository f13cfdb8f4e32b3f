use notjs::closure::make_adder;

fn main() {
    env_logger::init();

    println!("{}", make_adder(40)(2));
}
