//! Splits a deployment script into batches and prints what an executor would
//! send to the server, one batch at a time.
//!
//! Run with
//!
//! ```bash
//! cargo run -p sqlbatch --example split_script
//! ```
#![allow(missing_docs)]

use sqlbatch::{BatchSplitter, SplitOptions};

const SCRIPT: &str = "\
create table audit (id int identity, msg nvarchar(100));
GO
-- the trigger body may mention go freely: 'go', /* go */
create trigger trg on audit after insert as
begin
    print 'inserted, ready to go';
end
GO
insert into audit (msg) values (N'first');
GO 3
";

fn main() {
    let splitter = BatchSplitter::new(SplitOptions::default());
    let batches = match splitter.split(SCRIPT) {
        Ok(batches) => batches,
        Err(err) => {
            eprintln!("malformed script: {err}");
            std::process::exit(1);
        }
    };

    for (index, batch) in batches.iter().enumerate() {
        println!(
            "── batch {} (line {}, repeat {}) ──",
            index + 1,
            batch.line,
            batch.repeat_count
        );
        println!("{}", batch.text.trim());
    }
}
