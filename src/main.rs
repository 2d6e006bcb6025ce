//! Command-line interface for the patient queue.
//!
//! Interactive menu for adding regular and priority patients, removing
//! patients by PESEL and listing the queue.

use std::io::{self, BufRead, Write};

use patientqueue::config;
use patientqueue::{create_patient, PatientQueue, ValidationError};
use tracing_subscriber::EnvFilter;

struct QueueCLI {
    queue: PatientQueue,
    running: bool,
}

impl QueueCLI {
    fn new() -> Self {
        QueueCLI {
            queue: PatientQueue::new(),
            running: true,
        }
    }

    fn print_menu(&self) {
        println!("\n{}", config::APP_NAME);
        println!("1. Add Patient");
        println!("2. Add Priority Patient");
        println!("3. Remove Patient");
        println!("4. List All Patients");
        println!("5. Exit");
    }

    /// Read one trimmed line. `None` on end of input.
    fn get_input(&self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}: ", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    fn read_patient_fields(&self) -> io::Result<Option<[String; 6]>> {
        let prompts = [
            "Enter name",
            "Enter surname",
            "Enter PESEL (11 digits)",
            "Enter age",
            "Enter gender (k/m/i)",
            "Enter appointment time (HH:MM)",
        ];
        let mut fields: [String; 6] = Default::default();
        for (field, prompt) in fields.iter_mut().zip(prompts) {
            match self.get_input(prompt)? {
                Some(value) => *field = value,
                None => return Ok(None),
            }
        }
        Ok(Some(fields))
    }

    fn add_patient(&mut self, priority: bool) -> io::Result<()> {
        let Some([name, surname, pesel, age, gender, time]) = self.read_patient_fields()? else {
            self.running = false;
            return Ok(());
        };

        let patient = match create_patient(&name, &surname, &pesel, &age, &gender, &time, priority)
        {
            Ok(patient) => patient,
            Err(e) => {
                self.report_invalid(&e);
                return Ok(());
            }
        };

        if !priority {
            let position = self.queue.insert(patient);
            println!("Patient added successfully at position {}!\n", position);
            return Ok(());
        }

        match self.queue.insert_priority(patient) {
            Ok(result) => {
                for moved in &result.rescheduled {
                    println!(
                        "  Moved {} from {} to {}",
                        moved.pesel,
                        moved.from.format("%H:%M"),
                        moved.to.format("%H:%M")
                    );
                }
                if let Some(conflict) = &result.conflict {
                    println!("  {}", conflict);
                }
                println!(
                    "Priority patient added successfully at position {}!\n",
                    result.position
                );
            }
            Err(e) => println!("{}", e),
        }
        Ok(())
    }

    fn report_invalid(&self, error: &ValidationError) {
        println!("{}", error);
    }

    fn remove_patient(&mut self) -> io::Result<()> {
        let Some(pesel) = self.get_input("Enter PESEL of the patient to remove")? else {
            self.running = false;
            return Ok(());
        };

        if self.queue.remove(&pesel) {
            println!("Patient removed successfully!\n");
        } else {
            println!("Patient not found!\n");
        }
        Ok(())
    }

    fn list_patients(&self) {
        let patients = self.queue.list_all();
        if patients.is_empty() {
            println!("No patients in the queue.\n");
            return;
        }

        for patient in patients {
            println!("{}", patient);
        }
        println!();
    }

    fn run(&mut self) -> io::Result<()> {
        tracing::info!("{} v{} starting", config::APP_NAME, config::APP_VERSION);

        while self.running {
            self.print_menu();

            let Some(choice) = self.get_input("Enter your choice")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.add_patient(false)?,
                "2" => self.add_patient(true)?,
                "3" => self.remove_patient()?,
                "4" => self.list_patients(),
                "5" => {
                    self.running = false;
                    println!("Exiting the program.");
                }
                _ => println!("Invalid choice. Please try again.\n"),
            }
        }

        tracing::debug!("{}", self.queue);
        Ok(())
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    let mut cli = QueueCLI::new();
    cli.run()
}
