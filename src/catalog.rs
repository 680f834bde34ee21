//! The hardcoded commit message translations for the CISYNTH history.
//!
//! Each row is `(short hash, original first line, reformatted first line)`.
//! The hash only documents where the message came from; matching is done on
//! the original text alone.

/// Raw translation rows, in the order the commits were reviewed.
pub const COMMIT_TRANSLATIONS: &[(&str, &str, &str)] = &[
    (
        "7eafe35",
        "Fix label and boxes alignment defauts",
        "fix(ui): fix label and boxes alignment issues",
    ),
    ("4621d04", "Project renamed", "chore: rename project"),
    ("d430eee", "Save project before renaming", "chore: save project before renaming"),
    ("baa55b5", "Add new qml structure", "feat(ui): add new QML structure"),
    (
        "be8478d",
        "feat(ui): improve vertical scale rendering in spectrogram display",
        "feat(ui): improve vertical scale rendering in spectrogram display",
    ),
    (
        "332152e",
        "Amélioration de l'affichage des paramètres dans le spectrogramme",
        "feat(ui): improve parameter display in spectrogram",
    ),
    (
        "c1bea25",
        "Ajout de règles pour ignorer les fichiers volumineux dans .gitignore",
        "chore: add rules to ignore large files in .gitignore",
    ),
    (
        "1b642ad",
        "Suppression du fichier volumineux .vscode/browse.vc.db et mise à jour du .gitignore",
        "chore: remove large file .vscode/browse.vc.db and update .gitignore",
    ),
    (
        "9e77591",
        "Restructuration de la documentation et mise à jour des fichiers sources",
        "docs: restructure documentation and update source files",
    ),
    (
        "e6795f2",
        "feat: display original audio filename, start time and segment duration in parameters",
        "feat: display original audio filename, start time and segment duration in parameters",
    ),
    (
        "dc6f7e8",
        "Suppression du fichier volumineux du dépôt",
        "chore: remove large file from repository",
    ),
    (
        "0e53278",
        "Mise à jour du générateur de prévisualisation et ajout de ressources",
        "feat: update preview generator and add resources",
    ),
    (
        "09cd104",
        "Mise à jour de la documentation pour le bouton d'impression",
        "docs: update documentation for print button",
    ),
    (
        "d6916fa",
        "Ajout du bouton d'impression pour les spectrogrammes",
        "feat(ui): add print button for spectrograms",
    ),
    (
        "93d872f",
        "Mise à jour des fichiers de code pour la refactorisation",
        "refactor: update code files for refactoring",
    ),
    (
        "2721113",
        "Refactorisation de la documentation et de l'architecture du projet",
        "refactor: restructure project documentation and architecture",
    ),
    (
        "9e72b91",
        "Refactorisation majeure du code pour améliorer la modularité et l'extensibilité: - Ajout de la classe SpectrogramSettingsCpp pour centraliser les paramètres - Création du fichier Constants.h pour centraliser les constantes - Implémentation du pattern Strategy pour les visualisations - Ajout de la classe FileManager pour la gestion des fichiers - Ajout de la classe TaskManager pour la gestion des tâches en arrière-plan - Mise à jour de la classe SpectrogramGenerator pour utiliser les nouvelles abstractions - Mise à jour du fichier main.cpp pour initialiser les nouvelles classes",
        "refactor(core): major code refactoring to improve modularity and extensibility",
    ),
    ("9c48df2", "Commit before clean", "chore: prepare for cleanup"),
    (
        "a1aaf76",
        "refactor: restructure project layout and file organization",
        "refactor: restructure project layout and file organization",
    ),
    (
        "ee4017c",
        "refactor: reorganize project structure for better maintainability",
        "refactor: reorganize project structure for better maintainability",
    ),
    ("362f2a1", "Update button animation", "feat(ui): update button animation"),
    ("beb7f14", "Add gold theme", "feat(ui): add gold theme"),
    (
        "8c2c621",
        "Mise à jour du fichier .gitignore pour ignorer des fichiers générés par Qt spécifiques",
        "chore: update .gitignore to ignore Qt-specific generated files",
    ),
    (
        "5211d31",
        "Retrait des fichiers .DS_Store du suivi Git",
        "chore: remove .DS_Store files from Git tracking",
    ),
    (
        "d33a28e",
        "Nettoyage du dépôt : retrait des fichiers générés et binaires qui devraient être ignorés",
        "chore: clean repository by removing generated and binary files",
    ),
    (
        "9a2dbe0",
        "Nettoyage du dépôt : retrait des fichiers générés et binaires qui devraient être ignorés",
        "chore: clean repository by removing generated and binary files",
    ),
    (
        "2c28b67",
        "Ajout du fichier .gitignore au niveau du projet parent CISYNTH_App",
        "chore: add .gitignore at parent CISYNTH_App project level",
    ),
    (
        "a6e5602",
        "Mise à jour de la charte graphique et du fichier de ressources QML",
        "feat(ui): update graphic charter and QML resources file",
    ),
    (
        "09a220c",
        "Ajout du fichier .gitignore, des fichiers de thème (Theme.qml, ExempleTheme.qml, qmldir), du dossier fonts et du README pour la charte graphique",
        "feat(ui): add .gitignore, theme files, fonts folder and README for graphic charter",
    ),
    ("a6b573e", "Delete ignored files", "chore: delete ignored files"),
    ("3fb5e18", "Add .gitignore", "chore: add .gitignore"),
    ("5df6b5c", "first commit", "chore: initial commit"),
];
