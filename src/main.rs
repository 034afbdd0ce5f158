use log::error;
use stable_softmax::softmax;

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let input: Vec<f64> = vec![1.0, 2.0, 3.0];

    match softmax(&input) {
        Ok(output) => {
            println!("Input: {:?}", input);
            println!("Softmax output: {:?}", output);
        }
        Err(e) => {
            error!("Error computing softmax: {}", e);
            eprintln!("Error computing softmax: {}", e);
            std::process::exit(1);
        }
    }
}
