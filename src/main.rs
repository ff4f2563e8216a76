use radix_convert::action::cli::process_args;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(output) => log::info!("程式執行完成：{}", output),
        Err(e) => {
            log::error!("程式執行失敗：{}", e);
            eprintln!("錯誤：{}", e);
            std::process::exit(1);
        }
    }
}
